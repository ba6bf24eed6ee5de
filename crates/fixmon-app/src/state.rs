//! Application state for the fixture window
//!
//! Everything the renderer needs lives here: the light board, the flattened
//! control buttons, terminal specs, the main and aux log buffers, the focus
//! cursor, and the alert modal. Configuration flows in once at construction;
//! streamed text flows in through the append methods, which also feed the
//! light scanner.

use fixmon_core::{Client, Control, LightBoard, LogBuffer, TerminalSpec};

/// One aux log panel: a tailed file with its own buffer and channel.
#[derive(Debug)]
pub struct AuxLogPane {
    /// Path of the tailed file, also the panel title
    pub path: String,
    pub buffer: LogBuffer,
    /// Set when the tail channel has ended; never reopened
    pub closed: bool,
}

/// What a flattened control button does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonKind {
    /// One-shot command
    Command { command: String },

    /// Two-state toggle. `active` is visual-only state, never config-backed,
    /// starting inactive.
    Toggle {
        on_command: String,
        off_command: String,
        active: bool,
    },
}

/// A control button after group flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButton {
    pub label: String,
    /// Group name when this button came from a `group` cluster
    pub group: Option<String>,
    pub kind: ButtonKind,
}

/// Flatten config controls into renderable buttons.
///
/// Groups contribute one button per member (one nesting level only, per the
/// config contract); toggles start inactive.
fn flatten_controls(controls: &[Control]) -> Vec<ControlButton> {
    let mut buttons = Vec::new();
    for control in controls {
        match control {
            Control::Command(spec) => buttons.push(ControlButton {
                label: spec.name.clone(),
                group: None,
                kind: ButtonKind::Command {
                    command: spec.command.clone(),
                },
            }),
            Control::Toggle {
                name,
                on_command,
                off_command,
            } => buttons.push(ControlButton {
                label: name.clone(),
                group: None,
                kind: ButtonKind::Toggle {
                    on_command: on_command.clone(),
                    off_command: off_command.clone(),
                    active: false,
                },
            }),
            Control::Group { name, group } => {
                for spec in group {
                    buttons.push(ControlButton {
                        label: spec.name.clone(),
                        group: Some(name.clone()),
                        kind: ButtonKind::Command {
                            command: spec.command.clone(),
                        },
                    });
                }
            }
        }
    }
    buttons
}

/// The widget the focus cursor currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Light(usize),
    Terminal(usize),
    Control(usize),
}

/// Complete state of one fixture window.
#[derive(Debug)]
pub struct AppState {
    pub client: Client,
    pub lights: LightBoard,
    pub terminals: Vec<TerminalSpec>,
    pub buttons: Vec<ControlButton>,
    pub main_log: LogBuffer,
    pub aux_logs: Vec<AuxLogPane>,

    /// Blocking alert message; captures all input until dismissed
    pub alert: Option<String>,

    /// Flat focus cursor over lights, then terminals, then control buttons
    focus: usize,

    should_quit: bool,
}

impl AppState {
    pub fn new(client: Client) -> Self {
        let ui = &client.properties.ui;
        let lights = LightBoard::from_config(&ui.lights);
        let terminals = ui.terminals.clone();
        let buttons = flatten_controls(&ui.controls);
        let aux_logs = ui
            .logs
            .iter()
            .map(|path| AuxLogPane {
                path: path.clone(),
                buffer: LogBuffer::new(),
                closed: false,
            })
            .collect();

        Self {
            client,
            lights,
            terminals,
            buttons,
            main_log: LogBuffer::new(),
            aux_logs,
            alert: None,
            focus: 0,
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Streamed text
    // ─────────────────────────────────────────────────────────

    /// Append a chunk to the main log, feeding the light scanner first.
    pub fn append_main(&mut self, text: &str) {
        self.lights.scan(text);
        self.main_log.append(text);
    }

    /// Append a chunk to an aux log panel, feeding the light scanner first.
    /// Unknown indices are ignored.
    pub fn append_aux(&mut self, index: usize, text: &str) {
        self.lights.scan(text);
        if let Some(pane) = self.aux_logs.get_mut(index) {
            pane.buffer.append(text);
        }
    }

    /// Mark an aux log's tail channel as ended.
    pub fn close_aux(&mut self, index: usize) {
        if let Some(pane) = self.aux_logs.get_mut(index) {
            pane.closed = true;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    /// Number of focusable widgets.
    pub fn focus_count(&self) -> usize {
        self.lights.len() + self.terminals.len() + self.buttons.len()
    }

    /// The currently focused widget; `None` when nothing is focusable.
    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.target_at(self.focus)
    }

    /// Map a flat focus index onto a widget.
    pub fn target_at(&self, index: usize) -> Option<FocusTarget> {
        let lights = self.lights.len();
        let terminals = self.terminals.len();
        if index < lights {
            Some(FocusTarget::Light(index))
        } else if index < lights + terminals {
            Some(FocusTarget::Terminal(index - lights))
        } else if index < self.focus_count() {
            Some(FocusTarget::Control(index - lights - terminals))
        } else {
            None
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Alert / quit
    // ─────────────────────────────────────────────────────────

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixmon_core::{parse_client, LightState};

    fn client(json: &str) -> Client {
        parse_client(json).unwrap()
    }

    fn full_client() -> Client {
        client(
            r#"{
                "mid": "whale-07",
                "properties": { "ui": {
                    "lights": { "items": [
                        { "id": "ccd", "label": "CCD", "command": "case_close_debug" },
                        { "id": "lid", "label": "LID" }
                    ] },
                    "terminals": [ { "name": "NUC" } ],
                    "controls": [
                        { "name": "Upgrade", "command": "fw upgrade" },
                        { "name": "Fixture control", "group": [
                            { "name": "open", "command": "whale open" },
                            { "name": "close", "command": "whale close" }
                        ] }
                    ],
                    "logs": ["/var/log/factory.log"]
                } }
            }"#,
        )
    }

    #[test]
    fn test_new_without_ui_renders_nothing() {
        let state = AppState::new(client(r#"{ "mid": "bare" }"#));
        assert!(state.lights.is_empty());
        assert!(state.terminals.is_empty());
        assert!(state.buttons.is_empty());
        assert!(state.aux_logs.is_empty());
        assert_eq!(state.focus_count(), 0);
        assert!(state.focus_target().is_none());
    }

    #[test]
    fn test_flatten_groups_one_level() {
        let state = AppState::new(full_client());
        let labels: Vec<_> = state.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Upgrade", "open", "close"]);
        assert_eq!(state.buttons[0].group, None);
        assert_eq!(state.buttons[1].group.as_deref(), Some("Fixture control"));
        assert_eq!(state.buttons[2].group.as_deref(), Some("Fixture control"));
    }

    #[test]
    fn test_focus_order_lights_terminals_controls() {
        let mut state = AppState::new(full_client());
        assert_eq!(state.focus_target(), Some(FocusTarget::Light(0)));
        state.focus_next();
        assert_eq!(state.focus_target(), Some(FocusTarget::Light(1)));
        state.focus_next();
        assert_eq!(state.focus_target(), Some(FocusTarget::Terminal(0)));
        state.focus_next();
        assert_eq!(state.focus_target(), Some(FocusTarget::Control(0)));
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut state = AppState::new(full_client());
        state.focus_prev();
        assert_eq!(state.focus_target(), Some(FocusTarget::Control(2)));
        state.focus_next();
        assert_eq!(state.focus_target(), Some(FocusTarget::Light(0)));
    }

    #[test]
    fn test_focus_noop_when_nothing_focusable() {
        let mut state = AppState::new(client(r#"{ "mid": "bare" }"#));
        state.focus_next();
        state.focus_prev();
        assert!(state.focus_target().is_none());
    }

    #[test]
    fn test_append_main_feeds_scanner() {
        let mut state = AppState::new(full_client());
        state.append_main("boot ok\nLIGHT[ccd]='light-toggle-on'\n");
        assert_eq!(state.lights.get("ccd").unwrap().state, LightState::On);
        assert!(state.main_log.as_str().contains("boot ok"));
    }

    #[test]
    fn test_append_aux_feeds_scanner_and_buffer() {
        let mut state = AppState::new(full_client());
        state.append_aux(0, "LIGHT[lid]='light-toggle-on' tail line\n");
        assert_eq!(state.lights.get("lid").unwrap().state, LightState::On);
        assert!(state.aux_logs[0].buffer.as_str().contains("tail line"));
        // Main log is untouched by aux traffic.
        assert!(state.main_log.is_empty());
    }

    #[test]
    fn test_append_aux_unknown_index_still_scans() {
        let mut state = AppState::new(full_client());
        state.append_aux(9, "LIGHT[ccd]='light-toggle-on'");
        assert_eq!(state.lights.get("ccd").unwrap().state, LightState::On);
    }

    #[test]
    fn test_close_aux_marks_pane() {
        let mut state = AppState::new(full_client());
        state.close_aux(0);
        assert!(state.aux_logs[0].closed);
    }

    #[test]
    fn test_alert_lifecycle() {
        let mut state = AppState::new(full_client());
        assert!(state.alert.is_none());
        state.show_alert("This TTY device does not exist!");
        assert!(state.alert.is_some());
        state.dismiss_alert();
        assert!(state.alert.is_none());
    }
}
