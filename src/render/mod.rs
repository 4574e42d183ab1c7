use std::io;

use crate::sim::Frame;

pub mod text;

pub use text::TextRenderer;

/// What the renderer wants the simulation to do after showing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Step,
    Quit,
}

/// Shows the simulation between steps and decides when the next step happens
///
/// Implementations may block, for user input or to hold a frame rate.
pub trait Render {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<Advance>;
}
