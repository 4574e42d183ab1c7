use std::{
    io::{self, stdout, Stdout},
    panic,
};

use crossterm as ct;
use ct::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};

/// The terminal the maze is drawn on
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to the alternate screen in raw mode
///
/// Fails when stdout is not an interactive terminal. The screen is restored
/// before the error is returned.
pub fn init() -> io::Result<Tui> {
    let setup = || -> io::Result<Tui> {
        ct::execute!(stdout(), EnterAlternateScreen)?;
        enable_raw_mode()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(terminal)
    };

    match setup() {
        Ok(terminal) => {
            init_panic_hook();
            Ok(terminal)
        }
        Err(e) => {
            let _ = restore();
            Err(e)
        }
    }
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    ct::execute!(stdout(), LeaveAlternateScreen, ct::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed
fn init_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
