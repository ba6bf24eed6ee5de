//! Terminal launch descriptors and the external window-manager seam
//!
//! The fixture window never owns an interactive session itself; it resolves
//! an optional device path and hands a descriptor to a [`TerminalHost`],
//! which is responsible for establishing and owning the session.

use fixmon_core::TerminalSpec;

/// Alert shown when a `path_cmd` resolves to nothing.
pub const DEVICE_MISSING_ALERT: &str = "This TTY device does not exist!";

/// What gets handed to the terminal-window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalDescriptor {
    pub name: String,
    /// Machine id, injected by the fixture window
    pub mid: String,
    /// Resolved device path; `None` targets the fixture itself
    pub path: Option<String>,
}

/// The external terminal-window manager.
///
/// Implementations own terminal-session lifecycle entirely; the fixture
/// window only ever calls this once per activation that survives path
/// resolution.
pub trait TerminalHost {
    fn add_terminal(&mut self, id: &str, term: TerminalDescriptor);
}

/// Composite id distinguishing terminals across fixtures.
pub fn composite_id(mid: &str, name: &str) -> String {
    format!("{mid}::{name}")
}

/// Build the descriptor for a configured terminal on a machine.
pub fn descriptor_for(spec: &TerminalSpec, mid: &str) -> TerminalDescriptor {
    TerminalDescriptor {
        name: spec.name.clone(),
        mid: mid.to_string(),
        path: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_id() {
        assert_eq!(composite_id("ghost 1", "NUC"), "ghost 1::NUC");
    }

    #[test]
    fn test_descriptor_injects_mid_without_path() {
        let spec = TerminalSpec {
            name: "AP".into(),
            path_cmd: Some("ls /dev/ttyUSB*".into()),
        };
        let term = descriptor_for(&spec, "whale-07");
        assert_eq!(term.name, "AP");
        assert_eq!(term.mid, "whale-07");
        assert_eq!(term.path, None);
    }
}
