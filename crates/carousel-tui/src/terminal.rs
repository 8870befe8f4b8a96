use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture for as long as it lives
///
/// Global key and pointer capture is scoped to this guard; dropping it
/// restores the terminal even when the event loop bails out with an error.
pub struct TerminalSession {
    terminal: Tui,
    restored: bool,
}

impl TerminalSession {
    pub fn start(title: &str) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            SetTitle(title)
        ) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the terminal, reporting the first error
    ///
    /// Every step runs even if an earlier one fails; a failed restore is
    /// retried on the next call or on drop.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        let raw = disable_raw_mode();
        let screen = execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let cursor = self.terminal.show_cursor();

        first_error([raw, screen, cursor])?;
        self.restored = true;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_reports_earliest_failure() {
        let steps = [
            Ok(()),
            Err(io::Error::new(io::ErrorKind::Other, "raw mode")),
            Err(io::Error::new(io::ErrorKind::Other, "screen")),
        ];
        let err = first_error(steps).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_ok_when_all_steps_succeed() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }
}
