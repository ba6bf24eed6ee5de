//! # fixmon-core - Core Domain Types
//!
//! Foundation crate for Fixture Monitor. Provides the fixture configuration
//! model, light state and the output scanner, bounded log buffers, stream
//! event types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Configuration (`config`)
//! - [`Client`] - A fixture agent with machine id and properties
//! - [`UiConfig`] - The `properties.ui` section: lights, terminals, controls, logs
//! - [`Control`] - Control buttons as a sum type (flat command, toggle, group)
//! - [`load_client()`] - Load a properties document from disk
//!
//! ### Lights (`lights`)
//! - [`LightBoard`] - The rendered set of status lights
//! - [`LightState`] - On / Off / Unknown
//! - `LightBoard::scan()` - Update lights from `LIGHT[id]='token'` tokens in text
//!
//! ### Log Buffers (`logbuf`)
//! - [`LogBuffer`] - Append-only text buffer capped at a trailing window
//!
//! ### Events (`events`)
//! - [`StreamSource`] - Which panel a streamed chunk belongs to
//! - [`ShellEvent`] - Chunk / closed events from a shell channel
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use fixmon_core::prelude::*;
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod lights;
pub mod logbuf;
pub mod logging;
pub mod prelude;

pub use config::{
    load_client, parse_client, Client, CommandSpec, Control, LightSpec, LightsConfig, PollSpec,
    Properties, TerminalSpec, UiConfig,
};
pub use error::{Error, Result, ResultExt};
pub use events::{ShellEvent, StreamSource};
pub use lights::{Light, LightBoard, LightState};
pub use logbuf::{LogBuffer, LOG_BUF_SIZE};
