//! Engine - executes update actions against the remote agent
//!
//! The engine owns every channel the fixture window opens:
//! - ad-hoc command channels (light refresh, control activations) tracked in
//!   a [`ChannelRegistry`] so teardown can close stragglers,
//! - one long-lived tail channel per aux log panel, owned for the panel's
//!   whole lifetime,
//! and the seam to the external terminal-window manager.
//!
//! Channel events funnel through one forwarding task into the app's message
//! channel, so the update loop sees a single ordered stream per source.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

use fixmon_agent::{
    open_stream, run_capture, shell_url, tail_command, ChannelHandle, ChannelRegistry,
};
use fixmon_core::prelude::*;
use fixmon_core::{ShellEvent, StreamSource, UiConfig};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::terminals::TerminalHost;

/// Delay before the one-shot light refresh fires after mount.
pub const LIGHT_REFRESH_DELAY: Duration = Duration::from_secs(5);

pub struct Engine {
    base_url: Url,
    mid: String,
    msg_tx: mpsc::Sender<Message>,
    shell_tx: mpsc::Sender<ShellEvent>,
    registry: ChannelRegistry,
    aux_channels: Vec<ChannelHandle>,
    host: Box<dyn TerminalHost + Send>,
    forward_task: JoinHandle<()>,
}

impl Engine {
    /// Create an engine. Must be called from within a tokio runtime.
    pub fn new(
        base_url: Url,
        mid: String,
        msg_tx: mpsc::Sender<Message>,
        host: Box<dyn TerminalHost + Send>,
    ) -> Self {
        let (shell_tx, mut shell_rx) = mpsc::channel::<ShellEvent>(256);

        // Funnel channel events into the app message loop.
        let forward_tx = msg_tx.clone();
        let forward_task = tokio::spawn(async move {
            while let Some(event) = shell_rx.recv().await {
                if forward_tx.send(Message::Shell(event)).await.is_err() {
                    break;
                }
            }
        });

        Self {
            base_url,
            mid,
            msg_tx,
            shell_tx,
            registry: ChannelRegistry::new(),
            aux_channels: Vec::new(),
            host,
            forward_task,
        }
    }

    /// Mount-time startup: open one tail channel per configured aux log and
    /// schedule the one-shot light refresh.
    pub fn start(&mut self, ui: &UiConfig) {
        for (index, path) in ui.logs.iter().enumerate() {
            let url = shell_url(&self.base_url, &self.mid, &tail_command(path));
            info!("tailing {path} for aux panel {index}");
            let handle = open_stream(url, StreamSource::AuxLog(index), self.shell_tx.clone());
            self.aux_channels.push(handle);
        }

        if ui.lights.update_command.is_some() {
            let msg_tx = self.msg_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(LIGHT_REFRESH_DELAY).await;
                let _ = msg_tx.send(Message::RefreshLights).await;
            });
        }
    }

    /// Execute an action produced by `update()`.
    pub fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::RunCommand { command } => self.run_to_main_log(&command),

            UpdateAction::ResolveTerminalPath { index, command } => {
                let url = shell_url(&self.base_url, &self.mid, &command);
                let msg_tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let output = match run_capture(url, None).await {
                        Ok(output) => output,
                        Err(err) => {
                            warn!("path resolution failed: {err}");
                            String::new()
                        }
                    };
                    let _ = msg_tx.send(Message::PathResolved { index, output }).await;
                });
            }

            UpdateAction::OpenTerminal { id, term } => {
                info!("terminal handoff: {id} (path: {:?})", term.path);
                self.host.add_terminal(&id, term);
            }
        }
    }

    /// Open a streaming channel for a one-shot command; output lands in the
    /// main log. The channel stays tracked until teardown even if the command
    /// never completes.
    fn run_to_main_log(&mut self, command: &str) {
        let url = shell_url(&self.base_url, &self.mid, command);
        info!("run: {command}");
        let handle = open_stream(url, StreamSource::Main, self.shell_tx.clone());
        self.registry.prune_finished();
        self.registry.track(handle);
    }

    /// Close every channel this window opened: tracked ad-hoc command
    /// channels and the per-panel tail channels.
    pub fn shutdown(&mut self) {
        info!("engine shutdown: closing channels");
        self.registry.close_all();
        for mut handle in self.aux_channels.drain(..) {
            handle.close();
        }
        self.forward_task.abort();
    }

    /// Number of live-tracked ad-hoc channels (for diagnostics/tests).
    pub fn tracked_channels(&self) -> usize {
        self.registry.len()
    }
}
