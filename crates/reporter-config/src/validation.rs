//! Configuration validation.
//!
//! Collects every violation into a single `ConfigError` so the user sees
//! the whole list at once instead of fixing fields one at a time.

use crate::schema::ReporterConfig;
use reporter_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ReporterConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_presence(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_presence(errors: &mut Vec<String>, config: &ReporterConfig) {
    let presence = &config.presence;

    if !presence.application_id.is_empty()
        && !presence.application_id.chars().all(|c| c.is_ascii_digit())
    {
        errors.push(format!(
            "presence.application_id must be numeric, got '{}'",
            presence.application_id
        ));
    }

    if !(1..=120).contains(&presence.connect_timeout_secs) {
        errors.push(format!(
            "presence.connect_timeout_secs must be 1-120, got {}",
            presence.connect_timeout_secs
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PresenceSettings;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&ReporterConfig::default()).is_ok());
    }

    #[test]
    fn numeric_application_id_is_valid() {
        let config = ReporterConfig {
            presence: PresenceSettings {
                application_id: "1383904378154651768".into(),
                ..Default::default()
            },
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn non_numeric_application_id_is_rejected() {
        let config = ReporterConfig {
            presence: PresenceSettings {
                application_id: "my-app".into(),
                ..Default::default()
            },
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("application_id"));
    }

    #[test]
    fn out_of_range_timeout_is_rejected() {
        let config = ReporterConfig {
            presence: PresenceSettings {
                connect_timeout_secs: 0,
                ..Default::default()
            },
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("connect_timeout_secs"));

        let config = ReporterConfig {
            presence: PresenceSettings {
                connect_timeout_secs: 600,
                ..Default::default()
            },
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn all_errors_are_collected() {
        let config = ReporterConfig {
            presence: PresenceSettings {
                application_id: "nope".into(),
                connect_timeout_secs: 0,
                ..Default::default()
            },
        };
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("application_id"));
        assert!(msg.contains("connect_timeout_secs"));
    }
}
