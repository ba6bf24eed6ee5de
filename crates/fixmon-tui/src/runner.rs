//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Entry point given a loaded client and agent URL
//! - `run_loop`: Main event loop processing terminal and channel events

use tokio::sync::mpsc;
use url::Url;

use fixmon_app::{signals, update, AppState, Engine, Message, TerminalHost};
use fixmon_core::prelude::*;
use fixmon_core::Client;

use crate::{event, render, terminal};

/// Run the fixture window against a remote agent.
///
/// Owns the terminal for its whole lifetime; on return every channel the
/// window opened has been closed and the terminal restored.
pub async fn run(client: Client, agent_url: Url, host: Box<dyn TerminalHost + Send>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!("opening fixture window for {}", client.mid);

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(client);
    if state.client.properties.ui.is_empty() {
        info!("no ui section configured; rendering an empty fixture window");
    }

    // Unified message channel: keys, channel events, signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let mut engine = Engine::new(agent_url, state.client.mid.clone(), msg_tx, host);
    engine.start(&state.client.properties.ui);

    // Run the main loop
    let result = run_loop(&mut term, &mut state, &mut engine, msg_rx);

    // Teardown closes every channel the window opened, including ad-hoc
    // command channels still outstanding
    engine.shutdown();

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    engine: &mut Engine,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process queued messages (channel events, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, engine, msg);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(msg) = event::poll()? {
            process_message(state, engine, msg);
        }
    }
    Ok(())
}

/// Run one message through update(), executing actions and follow-ups.
fn process_message(state: &mut AppState, engine: &mut Engine, msg: Message) {
    let mut result = update(state, msg);
    loop {
        if let Some(action) = result.action.take() {
            engine.handle_action(action);
        }
        match result.message.take() {
            Some(msg) => result = update(state, msg),
            None => break,
        }
    }
}
