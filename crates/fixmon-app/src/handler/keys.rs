//! Key event handling

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Map a key press to a follow-up message.
///
/// While an alert is showing it captures all input: Enter/Esc dismiss it,
/// everything else is swallowed.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if state.alert.is_some() {
        if matches!(key, InputKey::Enter | InputKey::Esc) {
            state.dismiss_alert();
        }
        return None;
    }

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::Down | InputKey::Right => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Left => Some(Message::FocusPrev),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::Activate),

        _ => None,
    }
}
