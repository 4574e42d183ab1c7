pub mod maze_walk;

pub use maze_walk::{Action, MazeWalk};
