use ratatui::{prelude::*, widgets::*};

use crate::{maze::Cell, sim::Frame};

/// Columns per maze cell, so cells come out roughly square
const CELL_WIDTH: u16 = 2;

/// The maze drawn as blocks with the walker as a green dot
pub struct MazeView<'a> {
    frame: Frame<'a>,
}

impl<'a> MazeView<'a> {
    pub fn new(frame: Frame<'a>) -> Self {
        Self { frame }
    }

    /// Width and height the view needs including its border
    pub fn size(&self) -> (u16, u16) {
        let grid = self.frame.grid;
        (
            grid.width() as u16 * CELL_WIDTH + 2,
            grid.height() as u16 + 2,
        )
    }

    fn cell_span(&self, pos: (usize, usize), cell: Cell) -> Span<'static> {
        if pos == self.frame.position {
            Span::from("()").light_green().bold()
        } else if pos == self.frame.goal {
            Span::from("▒▒").yellow()
        } else {
            match cell {
                Cell::Wall => Span::from("██").white(),
                Cell::Open => Span::raw("  "),
            }
        }
    }
}

impl WidgetRef for MazeView<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let lines = self
            .frame
            .grid
            .rows()
            .enumerate()
            .map(|(y, row)| {
                let spans = row
                    .iter()
                    .enumerate()
                    .map(|(x, &cell)| self.cell_span((x, y), cell))
                    .collect::<Vec<_>>();
                Line::from(spans)
            })
            .collect::<Vec<_>>();

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!("Maze · step {}", self.frame.step)),
            )
            .render(area, buf);
    }
}
