//! Fixture configuration model
//!
//! Defines the shape of the `properties.json` document a fixture agent
//! publishes. Everything under `properties.ui` is optional: a client with no
//! `ui` section is a valid fixture that simply renders no lights, terminals,
//! controls, or log panels.
//!
//! All optionality is resolved here at deserialization time (missing sections
//! become empty defaults, control entries become a sum type), so the rest of
//! the codebase never re-checks field presence.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::lights::LightState;

/// A fixture agent as described by its properties document.
#[derive(Debug, Clone, Deserialize)]
pub struct Client {
    /// Machine identifier, used in channel paths and terminal ids
    pub mid: String,

    /// Serial identifier
    #[serde(default)]
    pub sid: Option<String>,

    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    /// UI description; missing means a fully empty fixture window
    #[serde(default)]
    pub ui: UiConfig,
}

/// The `properties.ui` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub lights: LightsConfig,

    #[serde(default)]
    pub terminals: Vec<TerminalSpec>,

    #[serde(default)]
    pub controls: Vec<Control>,

    /// File paths tailed into one aux log panel each
    #[serde(default)]
    pub logs: Vec<String>,
}

impl UiConfig {
    /// True when nothing at all is configured to render.
    pub fn is_empty(&self) -> bool {
        self.lights.items.is_empty()
            && self.terminals.is_empty()
            && self.controls.is_empty()
            && self.logs.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LightsConfig {
    #[serde(default)]
    pub items: Vec<LightSpec>,

    /// Master command that refreshes all light states once after mount
    #[serde(default)]
    pub update_command: Option<String>,
}

/// One configured status light.
#[derive(Debug, Clone, Deserialize)]
pub struct LightSpec {
    /// Identifier matched against `LIGHT[id]='...'` tokens in output
    pub id: String,

    /// Text shown on the badge
    pub label: String,

    /// Initial state tag (`light-toggle-on` / `light-toggle-off`)
    #[serde(default)]
    pub light: LightState,

    /// Command executed when the light is activated; inert without one
    #[serde(default)]
    pub command: Option<String>,

    /// Poll declaration consumed by the fixture-side update script,
    /// never scheduled by this component
    #[serde(default)]
    pub poll: Option<PollSpec>,

    /// Init declaration, likewise consumed fixture-side only
    #[serde(default)]
    pub init_cmd: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollSpec {
    pub cmd: String,
    /// Poll interval in milliseconds
    pub interval: u64,
}

/// One configured terminal button.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalSpec {
    pub name: String,

    /// Command whose output is the device path to connect to.
    /// Absent (or blank) means the terminal targets the fixture itself.
    #[serde(default)]
    pub path_cmd: Option<String>,
}

impl TerminalSpec {
    /// A blank or whitespace-only `path_cmd` is treated as absent.
    pub fn resolvable_path_cmd(&self) -> Option<&str> {
        self.path_cmd
            .as_deref()
            .filter(|cmd| !cmd.trim().is_empty())
    }
}

/// A control button entry, resolved by shape at load time.
///
/// The wire format distinguishes the variants by which fields are present:
/// a `group` array, an `on_command`/`off_command` pair (tagged
/// `type: "toggle"`), or a plain `command`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Control {
    /// A labeled cluster of flat commands; one nesting level only
    Group { name: String, group: Vec<CommandSpec> },

    /// A command toggled between two states
    Toggle {
        name: String,
        on_command: String,
        off_command: String,
    },

    /// A one-shot command
    Command(CommandSpec),
}

impl Control {
    pub fn name(&self) -> &str {
        match self {
            Control::Group { name, .. } => name,
            Control::Toggle { name, .. } => name,
            Control::Command(spec) => &spec.name,
        }
    }
}

/// A named flat command.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub command: String,
}

/// Load a client's properties document from disk.
pub fn load_client(path: &Path) -> Result<Client> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    parse_client(&contents)
}

/// Parse a client's properties document from a JSON string.
pub fn parse_client(json: &str) -> Result<Client> {
    serde_json::from_str(json).map_err(|e| Error::config_invalid(e.to_string()))
}
