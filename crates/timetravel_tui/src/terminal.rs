//! Terminal setup with guaranteed restoration.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs `restore` on drop, including when setup failed part-way.
pub struct TerminalGuard<R: FnMut()> {
    restore: R,
}

impl<R: FnMut()> TerminalGuard<R> {
    /// Runs `setup`; `restore` runs when the guard drops or if `setup` fails.
    pub fn new(setup: impl FnOnce() -> io::Result<()>, restore: R) -> io::Result<Self> {
        let guard = Self { restore };
        setup()?;
        Ok(guard)
    }
}

impl<R: FnMut()> Drop for TerminalGuard<R> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

/// Enables raw mode and the alternate screen until the guard drops.
pub fn enter_terminal() -> io::Result<TerminalGuard<impl FnMut()>> {
    TerminalGuard::new(
        || {
            enable_raw_mode()?;
            execute!(io::stdout(), EnterAlternateScreen)
        },
        || {
            if let Err(e) = disable_raw_mode() {
                warn!(error = %e, "Failed to disable raw mode");
            }
            if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
                warn!(error = %e, "Failed to leave alternate screen");
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restores_when_setup_fails() {
        let restored = Cell::new(0);
        let result = TerminalGuard::new(
            || Err(io::Error::other("no alternate screen")),
            || restored.set(restored.get() + 1),
        );
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restores_once_on_drop() {
        let restored = Cell::new(0);
        let guard = TerminalGuard::new(|| Ok(()), || restored.set(restored.get() + 1))
            .expect("setup succeeds");
        assert_eq!(restored.get(), 0);
        drop(guard);
        assert_eq!(restored.get(), 1);
    }
}
