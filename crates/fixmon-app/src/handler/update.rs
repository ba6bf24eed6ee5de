//! Main update function - handles state transitions (TEA pattern)

use fixmon_core::prelude::*;
use fixmon_core::{ShellEvent, StreamSource};

use crate::message::Message;
use crate::state::{AppState, ButtonKind, FocusTarget};
use crate::terminals::{composite_id, descriptor_for, DEVICE_MISSING_ALERT};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus_prev();
            UpdateResult::none()
        }

        Message::Activate => activate(state),

        Message::Shell(event) => {
            handle_shell_event(state, event);
            UpdateResult::none()
        }

        Message::RefreshLights => {
            match state.client.properties.ui.lights.update_command.clone() {
                Some(command) => UpdateResult::action(UpdateAction::RunCommand { command }),
                None => UpdateResult::none(),
            }
        }

        Message::PathResolved { index, output } => handle_path_resolved(state, index, &output),

        Message::Tick => UpdateResult::none(),
    }
}

/// Activate whatever the focus cursor points at.
fn activate(state: &mut AppState) -> UpdateResult {
    let Some(target) = state.focus_target() else {
        return UpdateResult::none();
    };

    match target {
        FocusTarget::Light(index) => {
            // Lights without a command are inert
            match state.lights.lights()[index].command.clone() {
                Some(command) => UpdateResult::action(UpdateAction::RunCommand { command }),
                None => UpdateResult::none(),
            }
        }

        FocusTarget::Terminal(index) => {
            let spec = &state.terminals[index];
            match spec.resolvable_path_cmd() {
                Some(path_cmd) => UpdateResult::action(UpdateAction::ResolveTerminalPath {
                    index,
                    command: path_cmd.to_string(),
                }),
                // Absent or blank path_cmd: open immediately, descriptor unmodified
                None => {
                    let term = descriptor_for(spec, &state.client.mid);
                    let id = composite_id(&state.client.mid, &spec.name);
                    UpdateResult::action(UpdateAction::OpenTerminal { id, term })
                }
            }
        }

        FocusTarget::Control(index) => match &mut state.buttons[index].kind {
            ButtonKind::Command { command } => UpdateResult::action(UpdateAction::RunCommand {
                command: command.clone(),
            }),
            ButtonKind::Toggle {
                on_command,
                off_command,
                active,
            } => {
                // Flip first; the new state picks the command
                *active = !*active;
                let command = if *active {
                    on_command.clone()
                } else {
                    off_command.clone()
                };
                UpdateResult::action(UpdateAction::RunCommand { command })
            }
        },
    }
}

fn handle_shell_event(state: &mut AppState, event: ShellEvent) {
    match event {
        ShellEvent::Chunk { source, text } => match source {
            StreamSource::Main => state.append_main(&text),
            StreamSource::AuxLog(index) => state.append_aux(index, &text),
        },
        ShellEvent::Closed { source } => {
            debug!("stream closed: {source}");
            if let StreamSource::AuxLog(index) = source {
                state.close_aux(index);
            }
        }
    }
}

/// Decide what to do with a terminal's resolved device path.
fn handle_path_resolved(state: &mut AppState, index: usize, output: &str) -> UpdateResult {
    let Some(spec) = state.terminals.get(index) else {
        return UpdateResult::none();
    };

    let path = output.trim();
    if path.is_empty() {
        state.show_alert(DEVICE_MISSING_ALERT);
        return UpdateResult::none();
    }

    let mut term = descriptor_for(spec, &state.client.mid);
    term.path = Some(path.to_string());
    let id = composite_id(&state.client.mid, &spec.name);
    UpdateResult::action(UpdateAction::OpenTerminal { id, term })
}
