//! Rendering backend setup and teardown.
//!
//! Both backends draw through `ratatui` on `crossterm`. The session restores
//! the terminal when it is dropped, so an error inside the event loop never
//! leaves the shell in raw mode.

use crate::config::{LayoutConfig, RenderBackend};
use crate::error::{CmPlotError, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use std::fmt;
use std::io::{self, Stdout, Write};

/// Terminal type used by the viewer.
pub type PlotTerminal = Terminal<CrosstermBackend<Stdout>>;

/// An initialized interactive terminal.
pub struct TerminalSession {
    terminal: PlotTerminal,
    backend: RenderBackend,
    restored: bool,
}

impl TerminalSession {
    /// Initialize the requested backend.
    ///
    /// Fails with [`CmPlotError::BackendInit`] when stdout is not an
    /// interactive terminal.
    pub fn start(backend: RenderBackend, layout: &LayoutConfig) -> Result<Self> {
        if !io::stdout().is_tty() {
            return Err(CmPlotError::backend_init(format!(
                "{} backend needs an interactive terminal, but stdout is not a TTY",
                backend.name()
            )));
        }

        enable_raw_mode()
            .map_err(|e| CmPlotError::backend_init(format!("cannot enable raw mode: {}", e)))?;

        match Self::open(backend, layout) {
            Ok(terminal) => {
                tracing::info!("Started {} backend", backend.name());
                Ok(Self {
                    terminal,
                    backend,
                    restored: false,
                })
            },
            Err(e) => {
                if backend == RenderBackend::Fullscreen {
                    let _ = execute!(io::stdout(), LeaveAlternateScreen);
                }
                let _ = disable_raw_mode();
                Err(CmPlotError::backend_init(e.to_string()))
            },
        }
    }

    fn open(backend: RenderBackend, layout: &LayoutConfig) -> io::Result<PlotTerminal> {
        let mut stdout = io::stdout();
        match backend {
            RenderBackend::Fullscreen => {
                execute!(stdout, EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            RenderBackend::Inline => Terminal::with_options(
                CrosstermBackend::new(stdout),
                TerminalOptions {
                    viewport: Viewport::Inline(layout.inline_height),
                },
            ),
        }
    }

    /// The backend this session was started with.
    pub fn backend(&self) -> RenderBackend {
        self.backend
    }

    /// Borrow the terminal for drawing.
    pub fn terminal_mut(&mut self) -> &mut PlotTerminal {
        &mut self.terminal
    }

    /// Restore the terminal to its original state.
    pub fn restore(mut self) -> Result<()> {
        self.restore_inner()
    }

    fn restore_inner(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        match self.backend {
            RenderBackend::Fullscreen => {
                execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
            },
            RenderBackend::Inline => {
                // Leave the chart in scrollback and put the prompt below it.
                writeln!(self.terminal.backend_mut())?;
            },
        }
        self.terminal
            .show_cursor()
            .map_err(|e| CmPlotError::Terminal(e.to_string()))?;

        tracing::info!("Restored terminal");
        Ok(())
    }
}

impl fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSession")
            .field("backend", &self.backend)
            .field("restored", &self.restored)
            .finish_non_exhaustive()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore_inner() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}
