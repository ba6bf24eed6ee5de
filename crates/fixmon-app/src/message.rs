//! Message types for the application (TEA pattern)

use fixmon_core::ShellEvent;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Event from a shell channel (chunk or close)
    Shell(ShellEvent),

    /// One-shot light refresh, scheduled once after mount
    RefreshLights,

    /// A terminal's `path_cmd` finished; `output` is its full untrimmed text
    PathResolved { index: usize, output: String },

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus/Activation Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next widget
    FocusNext,
    /// Move focus to the previous widget
    FocusPrev,
    /// Activate the focused widget (light command, terminal, control)
    Activate,
}
