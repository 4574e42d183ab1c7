use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::LevelFilter;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, WidgetRef},
};

use self::components::{render_help, Component, Logs, MazeView};
use crate::{
    render::{Advance, Render},
    sim::Frame,
};

mod components;
mod tui;

/// Route `log` records into the log pane
pub fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    tui_logger::init_logger(level)?;
    tui_logger::set_default_level(level);
    Ok(())
}

/// Takes an event, checks if it is a key press event, and returns the [`KeyCode`]
pub(crate) fn event_keycode(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key.code),
        _ => None,
    }
}

/// Draws the maze on the terminal and steps at a fixed frame rate
///
/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct TuiRenderer {
    terminal: tui::Tui,
    frame_time: Duration,
    next_frame: Instant,
    logs: Logs,
    show_help: bool,
}

impl TuiRenderer {
    /// Take over the terminal and step `fps` times per second
    ///
    /// **Errors** if stdout is not an interactive terminal
    pub fn new(fps: u32) -> io::Result<Self> {
        let terminal = tui::init()?;
        Ok(Self {
            terminal,
            frame_time: Duration::from_secs(1) / fps.max(1),
            next_frame: Instant::now(),
            logs: Logs::new(LevelFilter::Debug),
            show_help: false,
        })
    }

    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let view = MazeView::new(*frame);
        let (maze_width, maze_height) = view.size();
        let Self {
            terminal,
            logs,
            show_help,
            ..
        } = self;

        terminal.draw(|f| {
            let area = f.size();
            let [main_area, status_area] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            let [maze_area, log_area] =
                Layout::horizontal([Constraint::Length(maze_width), Constraint::Fill(1)])
                    .areas(main_area);
            let [maze_area, _] =
                Layout::vertical([Constraint::Length(maze_height), Constraint::Fill(1)])
                    .areas(maze_area);

            let buf = f.buffer_mut();
            view.render_ref(maze_area, buf);
            logs.render_ref(log_area, buf);
            Paragraph::new(Line::from(vec![
                " q ".light_cyan().bold(),
                "quit  ".into(),
                " h ".light_cyan().bold(),
                "help".into(),
            ]))
            .render(status_area, buf);

            if *show_help {
                render_help(area, buf);
            }
        })?;

        Ok(())
    }

    /// Handle key presses until the next frame is due
    fn wait(&mut self) -> io::Result<Advance> {
        loop {
            let timeout = self.next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }

            let event = event::read()?;
            match event_keycode(&event) {
                Some(KeyCode::Char('q') | KeyCode::Esc) => return Ok(Advance::Quit),
                Some(KeyCode::Char('h')) => self.show_help = !self.show_help,
                _ => {
                    self.logs.handle_ui_event(&event);
                }
            }
        }

        self.next_frame = Instant::now() + self.frame_time;
        Ok(Advance::Step)
    }
}

impl Render for TuiRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<Advance> {
        self.draw(frame)?;
        self.wait()
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = tui::restore();
    }
}
