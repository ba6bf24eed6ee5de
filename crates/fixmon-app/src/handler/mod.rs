//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handling, including the alert modal's input capture

pub mod keys;
pub mod update;


use crate::message::Message;
use crate::terminals::TerminalDescriptor;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Open a streaming channel for a one-shot command; output goes to the
    /// main log
    RunCommand { command: String },

    /// Run a terminal's `path_cmd` and report back via
    /// [`Message::PathResolved`]
    ResolveTerminalPath { index: usize, command: String },

    /// Hand a terminal descriptor off to the window manager
    OpenTerminal { id: String, term: TerminalDescriptor },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
