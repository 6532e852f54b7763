//! Page Info TUI - look up what the backend knows about a URL
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - search state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use pageinfo_tui::messages::ui_events::{key_to_ui_event, mouse_to_ui_event};
use pageinfo_tui::ui::draw_ui;
use pageinfo_tui::{AppActor, Config, NetworkActor, NetworkCommand, NetworkResponse, PageInfoClient, RenderState, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize logging to file; the terminal belongs to the UI
    let (dir, file) = split_log_path(&config.log_file);
    let file_appender = tracing_appender::rolling::never(dir, file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(api_host = %config.api_host, "Starting page info");

    // Terminal setup
    enable_raw_mode().context("failed to enable raw mode")?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let client = PageInfoClient::new(&config);
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(config.api_host.clone(), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

fn split_log_path(path: &Path) -> (&Path, &std::ffi::OsStr) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = path.file_name().unwrap_or(path.as_os_str());
    (dir, file)
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut button_area = Rect::default();

    loop {
        terminal.draw(|f| button_area = draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let ui_event = match event::read()? {
                Event::Key(key) => key_to_ui_event(
                    key,
                    current_state.focus,
                    current_state.is_loading(),
                    current_state.show_help,
                ),
                Event::Mouse(mouse) => mouse_to_ui_event(
                    mouse,
                    button_area,
                    current_state.is_loading(),
                    current_state.show_help,
                ),
                _ => None,
            };

            if let Some(event) = ui_event {
                let quit = matches!(event, UiEvent::Quit);
                let _ = ui_tx.send(event);
                if quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}
