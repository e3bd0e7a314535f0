//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the reporter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReporterConfig {
    pub presence: PresenceSettings,
}

/// Presence bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresenceSettings {
    /// Whether to connect to the external presence client at all.
    pub enabled: bool,
    /// Application id registered with the external client. Presence is
    /// skipped when this is empty.
    pub application_id: String,
    /// How long to wait for the client handshake before giving up.
    pub connect_timeout_secs: u64,
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            application_id: String::new(),
            connect_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReporterConfig::default();
        assert!(config.presence.enabled);
        assert!(config.presence.application_id.is_empty());
        assert_eq!(config.presence.connect_timeout_secs, 10);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ReporterConfig = toml::from_str(
            r#"
[presence]
application_id = "1383904378154651768"
"#,
        )
        .unwrap();
        assert!(config.presence.enabled);
        assert_eq!(config.presence.application_id, "1383904378154651768");
        assert_eq!(config.presence.connect_timeout_secs, 10);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: ReporterConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReporterConfig::default());
    }
}
