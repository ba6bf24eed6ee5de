//! Screen layout definitions for the TUI
//!
//! The fixture window stacks its rows vertically: header, lights, terminals,
//! controls, the main log, then one panel per aux log. Rows for features the
//! configuration leaves out are absent entirely, not rendered empty.

use ratatui::layout::{Constraint, Layout, Rect};

use fixmon_app::AppState;

/// Height of a single-row bordered panel (border + content + border).
const ROW_HEIGHT: u16 = 3;
/// Height of one aux log panel.
const AUX_LOG_HEIGHT: u16 = 6;

/// Screen areas for the main layout
#[derive(Debug, Clone)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Present only when lights are configured
    pub lights: Option<Rect>,
    /// Present only when terminals are configured
    pub terminals: Option<Rect>,
    /// Present only when controls are configured
    pub controls: Option<Rect>,
    /// Always present; the main log is the window's core surface
    pub main_log: Rect,
    /// One per configured aux log
    pub aux_logs: Vec<Rect>,
}

/// Compute the screen layout for the current state.
pub fn create(area: Rect, state: &AppState) -> ScreenAreas {
    let mut constraints = vec![Constraint::Length(ROW_HEIGHT)]; // header

    let has_lights = !state.lights.is_empty();
    let has_terminals = !state.terminals.is_empty();
    let has_controls = !state.buttons.is_empty();

    if has_lights {
        constraints.push(Constraint::Length(ROW_HEIGHT));
    }
    if has_terminals {
        constraints.push(Constraint::Length(ROW_HEIGHT));
    }
    if has_controls {
        constraints.push(Constraint::Length(ROW_HEIGHT));
    }

    constraints.push(Constraint::Min(ROW_HEIGHT)); // main log

    for _ in &state.aux_logs {
        constraints.push(Constraint::Length(AUX_LOG_HEIGHT));
    }

    let chunks = Layout::vertical(constraints).split(area);
    let mut next = chunks.iter().copied();

    let header = next.next().unwrap_or_default();
    let lights = has_lights.then(|| next.next().unwrap_or_default());
    let terminals = has_terminals.then(|| next.next().unwrap_or_default());
    let controls = has_controls.then(|| next.next().unwrap_or_default());
    let main_log = next.next().unwrap_or_default();
    let aux_logs = next.collect();

    ScreenAreas {
        header,
        lights,
        terminals,
        controls,
        main_log,
        aux_logs,
    }
}
