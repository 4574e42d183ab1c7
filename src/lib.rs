//! Procedurally generated mazes and a Q-learning agent that learns to walk them.
//!
//! [`maze::generate`] carves a perfect maze, [`algo::QTableAgent`] learns from
//! trial and error, and [`sim::Simulation`] couples the two one step at a time
//! while a [`render::Render`] implementation shows the progress.

/// Implemented RL algorithms
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Environment
pub mod env;

/// Exploration policies
pub mod exploration;

/// Maze environments
pub mod gym;

/// Grids and the maze generator
pub mod maze;

/// Experience records
pub mod memory;

/// Renderer interface and the plain text renderer
pub mod render;

/// The simulation driver
pub mod sim;

/// Terminal canvas renderer
#[cfg(feature = "viz")]
pub mod viz;

mod util;
