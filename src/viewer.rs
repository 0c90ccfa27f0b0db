//! The plotter: load, draw, wait for the user to close the chart.

use crate::app::App;
use crate::config::PlotConfig;
use crate::data::{CmHistory, HistoryReader};
use crate::error::Result;
use crate::terminal::TerminalSession;
use crate::ui;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// Event poll interval.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Load the history, display it, and block until the window is dismissed.
///
/// The file is read before the terminal is touched, so file and parse errors
/// never open a window.
pub fn run(config: &PlotConfig) -> Result<()> {
    tracing::info!(
        "Plotting {} with {} backend",
        config.data_path.display(),
        config.backend.name()
    );

    let history = HistoryReader::read_file(&config.data_path)?;
    show(history, config)
}

/// Display an already loaded history.
pub fn show(history: CmHistory, config: &PlotConfig) -> Result<()> {
    let mut app = App::new(history, config);

    let mut session = TerminalSession::start(config.backend, &config.layout)?;
    run_app(session.terminal_mut(), &mut app)?;
    session.restore()
}

/// Draw and handle input until the user quits.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            // Resize needs no handling: draw() autoresizes on the next pass.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
