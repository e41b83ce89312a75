mod api;
mod app;
mod config;
mod forms;
mod logging;
mod sync;
mod ui;

use crate::api::client::ApiClient;
use crate::api::manager::ApiManager;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    let log_path = logging::init(&cfg.logging)?;
    let backend_url = config::resolve_base_url(&cfg);
    info!(backend = %backend_url, log = ?log_path, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, backend_url).await;

    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exited with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    backend_url: String,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let client = ApiClient::new(&backend_url);
    let api = ApiManager::new(Arc::new(client), event_tx.clone());
    let mut state = AppState::new(cfg, backend_url);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task (10 FPS = 100ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    terminal.draw(|f| ui::render(f, &state))?;

    let mut actions = handler::on_mount(&mut state);
    loop {
        for action in actions.drain(..) {
            match action {
                Action::FetchSnapshot { token } => api.fetch_snapshot(token),
                Action::CreatePost { payload, draft } => api.create_post(payload, draft),
                Action::CreateEvent { payload, draft } => api.create_event(payload, draft),
                Action::MarkRead { id } => api.mark_read(id),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            info!("quitting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }

        let Some(event) = event_rx.recv().await else { break };
        actions = handler::handle_event(&mut state, event);
    }

    Ok(())
}
