//! # fixmon-app - Application State and Orchestration
//!
//! The TEA-style core of the fixture window: a [`Message`] enum, an
//! [`AppState`] holding every panel's state, an `update()` function mapping
//! messages to state changes and follow-up [`UpdateAction`]s, and an
//! [`Engine`] that executes those actions against the remote agent.
//!
//! Rendering lives in `fixmon-tui`; this crate knows nothing about ratatui.

pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;
pub mod terminals;

pub use engine::{Engine, LIGHT_REFRESH_DELAY};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, AuxLogPane, ButtonKind, ControlButton, FocusTarget};
pub use terminals::{composite_id, descriptor_for, TerminalDescriptor, TerminalHost};
