//! Stream event types
//!
//! A shell channel task forwards everything it receives as [`ShellEvent`]s
//! tagged with the [`StreamSource`] that owns the stream. Chunks from any
//! source also feed the light scanner; ordering is guaranteed per source
//! only, interleaving across sources is arrival-order.

use std::fmt;

/// Which panel a streamed chunk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSource {
    /// The fixture's aggregate command stream, shown in the main log panel
    Main,
    /// The aux log panel at this index (one per configured log file)
    AuxLog(usize),
}

impl fmt::Display for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSource::Main => write!(f, "main"),
            StreamSource::AuxLog(idx) => write!(f, "aux[{idx}]"),
        }
    }
}

/// An event emitted by a shell channel task.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// A decoded text chunk arrived on the channel
    Chunk { source: StreamSource, text: String },

    /// The channel ended. Abrupt drops and clean closes both land here;
    /// any buffered partial output has already been delivered as chunks.
    Closed { source: StreamSource },
}
