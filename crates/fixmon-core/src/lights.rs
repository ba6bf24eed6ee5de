//! Status lights and the output scanner that drives them
//!
//! Fixture scripts report state by writing `LIGHT[id]='light-toggle-on'`
//! tokens into whatever output stream happens to be flowing: the main command
//! stream, an aux log tail, or a one-shot command result. [`LightBoard::scan`]
//! picks those tokens out of arbitrary text chunks and flips the named lights.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::config::LightsConfig;

/// Matches `LIGHT[id]='token'` occurrences anywhere in a text chunk.
static LIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"LIGHT\[([^\]]*)\]\s*=\s*'(\S*)'").expect("invalid light pattern regex")
});

/// Wire tag for the "on" state.
pub const LIGHT_ON_TAG: &str = "light-toggle-on";
/// Wire tag for the "off" state.
pub const LIGHT_OFF_TAG: &str = "light-toggle-off";

/// Visual state of a status light.
///
/// `Unknown` is the fallback for tokens outside the two wire tags: the light
/// is updated (rendered dim) rather than left stale, so a misbehaving fixture
/// script is visible on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightState {
    On,
    #[default]
    Off,
    Unknown,
}

impl LightState {
    /// Map a wire tag to a state. Used both for scanned tokens and for the
    /// `light` initial-state field in configuration.
    pub fn from_token(token: &str) -> Self {
        match token {
            LIGHT_ON_TAG => LightState::On,
            LIGHT_OFF_TAG => LightState::Off,
            _ => LightState::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for LightState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(LightState::from_token(&tag))
    }
}

/// One rendered status light.
#[derive(Debug, Clone)]
pub struct Light {
    pub id: String,
    pub label: String,
    pub state: LightState,
    /// Command run when the light is activated; inert without one
    pub command: Option<String>,
}

impl Light {
    pub fn is_activatable(&self) -> bool {
        self.command.is_some()
    }
}

/// The currently rendered set of status lights.
///
/// State is in-memory only: mutated by [`scan`](Self::scan), reset on
/// remount, never persisted. Concurrent text sources race last-writer-wins
/// per light id.
#[derive(Debug, Default)]
pub struct LightBoard {
    lights: Vec<Light>,
}

impl LightBoard {
    pub fn from_config(config: &LightsConfig) -> Self {
        let lights = config
            .items
            .iter()
            .map(|spec| Light {
                id: spec.id.clone(),
                label: spec.label.clone(),
                state: spec.light,
                command: spec.command.clone(),
            })
            .collect();
        Self { lights }
    }

    /// Scan a text chunk for `LIGHT[id]='token'` occurrences and update the
    /// named lights in left-to-right order.
    ///
    /// Ids that name no rendered light are silently ignored; this is a lookup
    /// against the current set, not a collection mutation.
    pub fn scan(&mut self, text: &str) {
        for caps in LIGHT_PATTERN.captures_iter(text) {
            let id = &caps[1];
            let state = LightState::from_token(&caps[2]);
            if let Some(light) = self.lights.iter_mut().find(|l| l.id == id) {
                light.state = state;
            }
        }
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn get(&self, id: &str) -> Option<&Light> {
        self.lights.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LightSpec;

    fn board(ids: &[&str]) -> LightBoard {
        let config = LightsConfig {
            items: ids
                .iter()
                .map(|id| LightSpec {
                    id: id.to_string(),
                    label: id.to_uppercase(),
                    light: LightState::Off,
                    command: None,
                    poll: None,
                    init_cmd: None,
                })
                .collect(),
            update_command: None,
        };
        LightBoard::from_config(&config)
    }

    #[test]
    fn test_scan_updates_named_light() {
        let mut board = board(&["ccd"]);
        board.scan("LIGHT[ccd]='light-toggle-on'");
        assert_eq!(board.get("ccd").unwrap().state, LightState::On);
    }

    #[test]
    fn test_scan_multiple_occurrences_in_order() {
        let mut board = board(&["ccd", "dut-lid"]);
        board.scan(
            "prefix LIGHT[ccd]='light-toggle-on' middle \
             LIGHT[dut-lid]='light-toggle-on' LIGHT[ccd]='light-toggle-off' tail",
        );
        // Last occurrence wins for ccd; dut-lid stays on.
        assert_eq!(board.get("ccd").unwrap().state, LightState::Off);
        assert_eq!(board.get("dut-lid").unwrap().state, LightState::On);
    }

    #[test]
    fn test_scan_accepts_spaces_around_equals() {
        let mut board = board(&["ccd"]);
        board.scan("LIGHT[ccd]  =  'light-toggle-on'");
        assert_eq!(board.get("ccd").unwrap().state, LightState::On);
    }

    #[test]
    fn test_scan_unknown_id_ignored() {
        let mut board = board(&["ccd"]);
        board.scan("LIGHT[nonexistent]='light-toggle-on'");
        assert_eq!(board.get("ccd").unwrap().state, LightState::Off);
        assert!(board.get("nonexistent").is_none());
    }

    #[test]
    fn test_scan_unknown_token_maps_to_unknown() {
        let mut board = board(&["ccd"]);
        board.scan("LIGHT[ccd]='light-toggle-blinking'");
        assert_eq!(board.get("ccd").unwrap().state, LightState::Unknown);
    }

    #[test]
    fn test_scan_malformed_tokens_ignored() {
        let mut board = board(&["ccd"]);
        board.scan("LIGHT[ccd]=light-toggle-on");
        board.scan("LIGHT[ccd'light-toggle-on'");
        board.scan("LIGHT ccd ='light-toggle-on'");
        assert_eq!(board.get("ccd").unwrap().state, LightState::Off);
    }

    #[test]
    fn test_scan_text_without_tokens_is_noop() {
        let mut board = board(&["ccd"]);
        board.scan("plain log output\nwith several lines\n");
        assert_eq!(board.get("ccd").unwrap().state, LightState::Off);
    }

    #[test]
    fn test_scan_chunk_spanning_lines() {
        let mut board = board(&["a", "b"]);
        board.scan("LIGHT[a]='light-toggle-on'\nnoise\nLIGHT[b]='light-toggle-off'\n");
        assert_eq!(board.get("a").unwrap().state, LightState::On);
        assert_eq!(board.get("b").unwrap().state, LightState::Off);
    }

    #[test]
    fn test_from_config_preserves_initial_state_and_command() {
        let config = LightsConfig {
            items: vec![LightSpec {
                id: "ccd".into(),
                label: "CCD".into(),
                light: LightState::On,
                command: Some("case_close_debug".into()),
                poll: None,
                init_cmd: None,
            }],
            update_command: Some("update_light_status".into()),
        };
        let board = LightBoard::from_config(&config);
        let light = board.get("ccd").unwrap();
        assert_eq!(light.state, LightState::On);
        assert!(light.is_activatable());
    }
}
