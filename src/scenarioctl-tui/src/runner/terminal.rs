//! Terminal setup, teardown, and management.
//!
//! This module handles crossterm terminal initialization and cleanup for the TUI.
//! It provides RAII-based cleanup so the terminal is restored to a sane state,
//! even when the process panics.
//!
//! # Example
//!
//! ```rust,ignore
//! use scenarioctl_tui::runner::terminal::{ScenarioTerminal, TerminalOptions};
//!
//! let mut terminal = ScenarioTerminal::with_options(
//!     TerminalOptions::new().title("scenarioctl"),
//! )?;
//!
//! terminal.draw(|frame| {
//!     // ... render widgets
//! })?;
//!
//! // Terminal is automatically restored on drop
//! ```

use std::io::{self, IsTerminal, Stdout, stdout};
use std::panic;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Title to restore on exit, saved before we set ours.
static ORIGINAL_TITLE: Mutex<Option<String>> = Mutex::new(None);

/// Whether the panic hook is installed.
static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Restores the terminal when dropped.
///
/// Remembers which modes were enabled so only those are undone.
#[derive(Debug)]
pub struct TerminalGuard {
    alternate_screen: bool,
    bracketed_paste: bool,
    restore_title: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal_impl(
            self.alternate_screen,
            self.bracketed_paste,
            self.restore_title,
        );
    }
}

/// Terminal modes to enable at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOptions {
    pub alternate_screen: bool,
    /// Deliver pasted text as one event instead of a burst of key presses.
    pub bracketed_paste: bool,
    pub title: Option<String>,
    pub clear_on_start: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            bracketed_paste: true,
            title: Some("scenarioctl".to_string()),
            clear_on_start: true,
        }
    }
}

impl TerminalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    pub fn bracketed_paste(mut self, enabled: bool) -> Self {
        self.bracketed_paste = enabled;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn no_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn clear_on_start(mut self, enabled: bool) -> Self {
        self.clear_on_start = enabled;
        self
    }
}

/// A crossterm-backed ratatui terminal that restores itself on drop.
pub struct ScenarioTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl ScenarioTerminal {
    pub fn new() -> Result<Self> {
        Self::with_options(TerminalOptions::default())
    }

    pub fn with_options(options: TerminalOptions) -> Result<Self> {
        init_terminal(&options).context("failed to prepare terminal")?;

        // Created before the backend so a failure below still restores.
        let guard = TerminalGuard {
            alternate_screen: options.alternate_screen,
            bracketed_paste: options.bracketed_paste,
            restore_title: options.title.is_some(),
        };
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))
            .context("failed to create terminal backend")?;

        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    pub fn clear(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }

    /// Draw a frame.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

fn init_terminal(options: &TerminalOptions) -> Result<()> {
    install_panic_hook();

    // Most terminals title themselves after the working directory
    if options.title.is_some()
        && let Ok(mut guard) = ORIGINAL_TITLE.lock()
        && guard.is_none()
        && let Ok(dir) = std::env::current_dir()
    {
        *guard = Some(dir.display().to_string());
    }

    enable_raw_mode()?;

    let mut stdout = stdout();

    if options.alternate_screen {
        execute!(stdout, EnterAlternateScreen)?;
    }

    if options.bracketed_paste {
        execute!(stdout, EnableBracketedPaste)?;
    }

    if options.clear_on_start {
        execute!(stdout, Clear(ClearType::All))?;
    }

    execute!(stdout, cursor::Hide)?;

    if let Some(ref title) = options.title {
        execute!(stdout, SetTitle(title))?;
    }

    Ok(())
}

fn restore_terminal_impl(
    alternate_screen: bool,
    bracketed_paste: bool,
    restore_title: bool,
) -> Result<()> {
    let mut stdout = stdout();

    execute!(stdout, cursor::Show)?;

    if bracketed_paste {
        execute!(stdout, DisableBracketedPaste)?;
    }

    if alternate_screen {
        execute!(stdout, LeaveAlternateScreen)?;
    }

    if restore_title
        && let Ok(guard) = ORIGINAL_TITLE.lock()
        && let Some(ref title) = *guard
    {
        let _ = execute!(stdout, SetTitle(title));
    }

    disable_raw_mode()?;

    Ok(())
}

/// Undo every mode [`ScenarioTerminal`] can enable.
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl(true, true, true)
}

fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore first so the message is readable
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

pub fn is_terminal() -> bool {
    stdout().is_terminal()
}

/// Whether stdin and stdout are both interactive.
pub fn is_interactive() -> bool {
    is_terminal() && io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TerminalOptions::default();
        assert!(options.alternate_screen);
        assert!(options.bracketed_paste);
        assert_eq!(options.title.as_deref(), Some("scenarioctl"));
    }

    #[test]
    fn test_options_builder() {
        let options = TerminalOptions::new()
            .alternate_screen(false)
            .bracketed_paste(false)
            .clear_on_start(false)
            .no_title();
        assert_eq!(
            options,
            TerminalOptions {
                alternate_screen: false,
                bracketed_paste: false,
                title: None,
                clear_on_start: false,
            }
        );
    }
}
