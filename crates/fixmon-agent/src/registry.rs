//! Channel registry for window teardown
//!
//! The composition root opens an unbounded number of ad-hoc command channels
//! over its lifetime (light refreshes, control activations). Each one is
//! tracked here so teardown closes every channel still live, including ones
//! whose originating interaction is long gone.

use crate::shell::ChannelHandle;

/// Owns every ad-hoc channel the fixture window has opened.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: Vec<ChannelHandle>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a channel for teardown.
    pub fn track(&mut self, handle: ChannelHandle) {
        self.channels.push(handle);
    }

    /// Drop handles whose background task has already exited.
    ///
    /// Keeps the list from growing unboundedly on a long-lived window; called
    /// opportunistically whenever a channel reports closed.
    pub fn prune_finished(&mut self) {
        self.channels.retain(|handle| !handle.is_finished());
    }

    /// Close every tracked channel.
    pub fn close_all(&mut self) {
        for mut handle in self.channels.drain(..) {
            handle.close();
        }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
