use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{maze::Cell, sim::Frame};

use super::{Advance, Render};

const AGENT_CHAR: char = 'R';
const GOAL_CHAR: char = 'G';

/// Dumps the maze as text and waits for a line of input before every step
///
/// Walls are `#`, open cells `.`, the agent `R` and the goal `G`. Reaching the
/// end of the input quits.
pub struct TextRenderer<W, I> {
    out: W,
    input: I,
}

impl<W: Write, I: BufRead> TextRenderer<W, I> {
    pub fn new(out: W, input: I) -> Self {
        Self { out, input }
    }

    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        for (y, row) in frame.grid.rows().enumerate() {
            let line = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match ((x, y), cell) {
                    (pos, _) if pos == frame.position => AGENT_CHAR,
                    (pos, _) if pos == frame.goal => GOAL_CHAR,
                    (_, Cell::Wall) => '#',
                    (_, Cell::Open) => '.',
                })
                .collect::<String>();
            writeln!(self.out, "{line}")?;
        }

        let (rx, ry) = frame.position;
        let (gx, gy) = frame.goal;
        writeln!(
            self.out,
            "Step {}: Robot is at ({rx}, {ry}), Goal is at ({gx}, {gy})",
            frame.step
        )
    }
}

impl TextRenderer<Stdout, StdinLock<'static>> {
    /// Render to stdout and read keypresses from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stdin().lock())
    }
}

impl<W: Write, I: BufRead> Render for TextRenderer<W, I> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<Advance> {
        self.draw(frame)?;
        write!(self.out, "Press Enter to step...")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(Advance::Quit);
        }

        Ok(Advance::Step)
    }
}
