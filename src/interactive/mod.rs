pub mod app;
pub mod event;
pub mod layout;
pub mod panels;
pub mod popups;
pub mod state;
pub mod ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::checkout::Gateway;
use crate::client::RegistrationApi;
use crate::constants::TICK_RATE_MS;
use crate::error::{IdeatexError, IdeatexResult};

use app::DashboardApp;
use event::{Event, EventHandler};

/// Run the dashboard TUI to completion.
pub async fn run<C, G>(app: &mut DashboardApp<C, G>) -> IdeatexResult<()>
where
    C: RegistrationApi + Clone + 'static,
    G: Gateway,
{
    enable_raw_mode().map_err(|e| IdeatexError::TerminalError(e.to_string()))?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| IdeatexError::TerminalError(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| IdeatexError::TerminalError(e.to_string()))?;

    // Show the loading view before the first fetch resolves; no other view
    // may flash in ahead of it.
    terminal
        .draw(|f| ui::draw(f, &app.state))
        .map_err(|e| IdeatexError::TerminalError(e.to_string()))?;
    app.init().await;

    let events = EventHandler::new(TICK_RATE_MS);
    let result = run_loop(app, &mut terminal, &events).await;

    disable_raw_mode().map_err(|e| IdeatexError::TerminalError(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| IdeatexError::TerminalError(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| IdeatexError::TerminalError(e.to_string()))?;

    result
}

async fn run_loop<C, G>(
    app: &mut DashboardApp<C, G>,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    events: &EventHandler,
) -> IdeatexResult<()>
where
    C: RegistrationApi + Clone + 'static,
    G: Gateway,
{
    loop {
        terminal
            .draw(|f| ui::draw(f, &app.state))
            .map_err(|e| IdeatexError::TerminalError(e.to_string()))?;

        match events.recv() {
            Ok(Event::Key(key)) => app.handle_key(key.code).await,
            Ok(Event::Tick) => app.tick().await,
            Err(_) => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}
