//! Live terminal view of Buffon's needle experiment
//!
//! Provides:
//! - A braille canvas of the ruled plane with every needle dropped so far
//! - An overlay with the running π estimate and trial/crossing counts
//! - Pause, speed and restart controls
//! - A headless reporter for runs without a terminal

pub mod app;
pub mod headless;
pub mod logging;
pub mod prompt;
pub mod ui;

use buffon_core::Simulation;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fmt::Display;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// Run the live view until the user quits
pub fn run(simulation: Simulation, interval: Duration) -> Result<(), String> {
    // Setup terminal
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e))?;
    let mut stdout = stdout();
    leave_raw_on_err(
        execute!(stdout, EnterAlternateScreen),
        "Failed to enter alternate screen",
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return leave_raw_on_err(Err(e), "Failed to create terminal");
        }
    };

    let app_state = app::App::new(simulation, interval);

    // Run the app
    let result = run_app(&mut terminal, app_state);

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(|e| format!("Application error: {}", e))
}

/// Setup failed after raw mode was enabled: switch it back off before
/// reporting
fn leave_raw_on_err<T, E: Display>(result: Result<T, E>, context: &str) -> Result<T, String> {
    result.map_err(|e| {
        let _ = disable_raw_mode();
        format!("{}: {}", context, e)
    })
}

/// Internal run loop (specialized for CrosstermBackend)
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: app::App,
) -> io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};

    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.time_until_next(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_setup_error_leaves_raw_mode() -> Result<(), String> {
        let err = io::Error::other("no tty");
        let result: Result<(), String> =
            leave_raw_on_err(Err(err), "Failed to enter alternate screen");
        assert_eq!(result.unwrap_err(), "Failed to enter alternate screen: no tty");
        assert!(!is_raw_mode_enabled().map_err(|e| e.to_string())?);
        Ok(())
    }

    #[test]
    fn test_setup_success_passes_through() {
        let result = leave_raw_on_err(Ok::<u8, io::Error>(7), "unused");
        assert_eq!(result, Ok(7));
    }
}
