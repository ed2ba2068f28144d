//! Terminal user interface
//!
//! Owns the terminal for the lifetime of the session. Each key press is
//! mapped to an action and awaited to completion before the next event is
//! read, so at most one request is in flight at a time.

pub mod input;
pub mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::config::UiConfig;
use crate::handlers::Controller;
use crate::services::{Authenticator, DirectoryApi};
use crate::utils::errors::Result;
use input::Flow;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interactive session until the user quits
pub async fn run<A, Au>(controller: &mut Controller<A, Au>, config: &UiConfig) -> Result<()>
where
    A: DirectoryApi,
    Au: Authenticator,
{
    let mut terminal = setup_terminal()?;
    info!("Terminal session started");

    let outcome = event_loop(&mut terminal, controller, config).await;

    restore_terminal(&mut terminal)?;
    info!("Terminal session ended");
    outcome
}

async fn event_loop<A, Au>(
    terminal: &mut Tui,
    controller: &mut Controller<A, Au>,
    config: &UiConfig,
) -> Result<()>
where
    A: DirectoryApi,
    Au: Authenticator,
{
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(config.tick_rate_ms));

    loop {
        terminal.draw(|frame| ui::render(frame, controller.state(), config))?;

        tokio::select! {
            _ = tick.tick() => {}
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let action = input::map_key(key, controller.state());
                    debug!(?action, "Key mapped");
                    if input::dispatch(controller, action).await == Flow::Exit {
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}
