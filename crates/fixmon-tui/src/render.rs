//! Top-level view composition

use ratatui::Frame;

use fixmon_app::{AppState, FocusTarget};

use crate::layout;
use crate::widgets::{AlertDialog, ControlPanel, Header, LightBoardView, LogView, TerminalBar};

/// Render the whole fixture window
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area, state);

    let focus = state.focus_target();
    let light_focus = match focus {
        Some(FocusTarget::Light(index)) => Some(index),
        _ => None,
    };
    let terminal_focus = match focus {
        Some(FocusTarget::Terminal(index)) => Some(index),
        _ => None,
    };
    let control_focus = match focus {
        Some(FocusTarget::Control(index)) => Some(index),
        _ => None,
    };

    frame.render_widget(Header::new(&state.client.mid), areas.header);

    if let Some(rect) = areas.lights {
        frame.render_widget(
            LightBoardView::new(&state.lights).focus(light_focus),
            rect,
        );
    }

    if let Some(rect) = areas.terminals {
        frame.render_widget(
            TerminalBar::new(&state.terminals).focus(terminal_focus),
            rect,
        );
    }

    if let Some(rect) = areas.controls {
        frame.render_widget(
            ControlPanel::new(&state.buttons).focus(control_focus),
            rect,
        );
    }

    frame.render_widget(LogView::new(&state.main_log, "Main Log"), areas.main_log);

    for (pane, rect) in state.aux_logs.iter().zip(&areas.aux_logs) {
        frame.render_widget(
            LogView::new(&pane.buffer, &pane.path).closed(pane.closed),
            *rect,
        );
    }

    // Alert modal paints over everything
    if let Some(message) = &state.alert {
        frame.render_widget(AlertDialog::new(message), area);
    }
}
