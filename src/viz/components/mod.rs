mod help;
mod log;
mod maze;

use crossterm::event::Event;
use ratatui::widgets::WidgetRef;

pub use self::help::render_help;
pub use self::log::Logs;
pub use self::maze::MazeView;

/// A widget that also reacts to terminal events
pub trait Component: WidgetRef {
    /// **Returns** whether the event was consumed
    fn handle_ui_event(&mut self, event: &Event) -> bool;
}
