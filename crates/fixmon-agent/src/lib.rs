//! # fixmon-agent - Remote Agent Shell Channels
//!
//! Transport layer between the fixture window and the remote agent. Every
//! remote interaction is a WebSocket "shell channel": the command travels as
//! a percent-encoded query parameter, the agent streams raw output frames
//! back, and the server closing the socket ends the session. No framing, no
//! retries, no reconnects.
//!
//! Depends on [`fixmon_core`] for event types and error handling.
//!
//! ## Public API
//!
//! ### Streaming Channels (`shell`)
//! - [`shell_url()`] - Build the shell endpoint URL for a machine + command
//! - [`open_stream()`] - Open a channel and stream decoded chunks to an mpsc sender
//! - [`ChannelHandle`] - Owned handle; closing (or dropping) it tears the channel down
//!
//! ### One-shot Commands (`commands`)
//! - [`run_capture()`] - Execute a command and collect its full output until close
//! - [`tail_command()`] - Build the `tail -f` command used for aux log panels
//!
//! ### Teardown (`registry`)
//! - [`ChannelRegistry`] - Tracks ad-hoc channels so teardown closes every one

pub mod commands;
pub mod registry;
pub mod shell;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use commands::{run_capture, tail_command};
pub use registry::ChannelRegistry;
pub use shell::{open_stream, shell_url, ChannelHandle};
