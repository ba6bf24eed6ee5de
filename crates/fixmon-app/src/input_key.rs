//! Terminal-agnostic key representation
//!
//! Decouples the app layer from crossterm; the TUI layer converts raw key
//! events into these before they enter the message loop.

/// A pressed key, already normalized by the terminal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}
