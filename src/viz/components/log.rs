use crossterm::event::{Event, KeyCode};
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::viz::event_keycode;

use super::Component;

/// Pane beside the maze listing the walker's progress messages
///
/// `q`, `Esc` and `h` belong to the renderer, so only the navigation keys
/// shown in the help popup reach the pane.
pub struct Logs {
    state: TuiWidgetState,
}

impl Logs {
    /// Show records up to `level` until the user changes it
    pub fn new(level: log::LevelFilter) -> Self {
        Self {
            state: TuiWidgetState::new().set_default_display_level(level),
        }
    }
}

/// The pane action bound to `key`, if any
fn pane_event(key: KeyCode) -> Option<TuiWidgetEvent> {
    Some(match key {
        KeyCode::Up => TuiWidgetEvent::UpKey,
        KeyCode::Down => TuiWidgetEvent::DownKey,
        KeyCode::Left => TuiWidgetEvent::LeftKey,
        KeyCode::Right => TuiWidgetEvent::RightKey,
        KeyCode::Char('+' | '=') => TuiWidgetEvent::PlusKey,
        KeyCode::Char('-' | '_') => TuiWidgetEvent::MinusKey,
        KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
        KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
        _ => return None,
    })
}

impl WidgetRef for Logs {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        TuiLoggerSmartWidget::default()
            .style(Style::default().gray())
            .style_error(Style::default().light_red().bold())
            .style_warn(Style::default().yellow())
            .style_info(Style::default().light_green())
            .output_separator('|')
            .state(&self.state)
            .render(area, buf);
    }
}

impl Component for Logs {
    fn handle_ui_event(&mut self, event: &Event) -> bool {
        match event_keycode(event).and_then(pane_event) {
            Some(widget_event) => {
                self.state.transition(widget_event);
                true
            }
            None => false,
        }
    }
}
