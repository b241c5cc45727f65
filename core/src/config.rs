use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::AreaRules;
use crate::login::LoginRules;
use crate::map::MapSettings;
use crate::registration::RegistrationRules;
use crate::search::SearchSettings;
use crate::session::RouterSettings;
use crate::upload::UploadSettings;

/// Every tunable of the dashboard. Missing fields take their defaults, so an
/// override only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrishtiConfig {
    pub login: LoginRules,
    pub area: AreaRules,
    pub map: MapSettings,
    pub registration: RegistrationRules,
    pub upload: UploadSettings,
    pub search: SearchSettings,
    pub router: RouterSettings,
}

impl DrishtiConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects combinations the login and area rules cannot act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let login = &self.login;
        if login.success_attempt == 0 {
            return Err(ConfigError::Invalid("login.success_attempt must be at least 1"));
        }
        if login.lock_attempt <= login.success_attempt {
            return Err(ConfigError::Invalid(
                "login.lock_attempt must be greater than login.success_attempt",
            ));
        }
        if self.area.min_sq_km > self.area.max_sq_km {
            return Err(ConfigError::Invalid(
                "area.min_sq_km must not exceed area.max_sq_km",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = DrishtiConfig::from_json(
            r#"{ "login": { "success_attempt": 1 }, "area": { "max_sq_km": 500.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.login.success_attempt, 1);
        assert_eq!(config.login.lock_attempt, 4);
        assert_eq!(config.area.max_sq_km, 500.0);
        assert_eq!(config.area.min_sq_km, 1.0);
        assert_eq!(config.search, SearchSettings::default());
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(
            DrishtiConfig::from_json("{}").unwrap(),
            DrishtiConfig::default()
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = DrishtiConfig::from_json("{ login: }").unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(DrishtiConfig::default().validate().is_ok());
    }

    #[test]
    fn lockout_must_come_after_success() {
        for json in [
            r#"{ "login": { "lock_attempt": 0 } }"#,
            r#"{ "login": { "lock_attempt": 3 } }"#,
            r#"{ "login": { "success_attempt": 5 } }"#,
        ] {
            let err = DrishtiConfig::from_json(json).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid(msg) if msg.contains("lock_attempt")),
                "{json}: {err}"
            );
        }
    }

    #[test]
    fn success_attempt_zero_is_rejected() {
        let err =
            DrishtiConfig::from_json(r#"{ "login": { "success_attempt": 0 } }"#)
                .unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid(msg) if msg.contains("success_attempt"))
        );
    }

    #[test]
    fn area_limits_must_be_ordered() {
        let err = DrishtiConfig::from_json(
            r#"{ "area": { "min_sq_km": 600.0, "max_sq_km": 500.0 } }"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: area.min_sq_km must not exceed area.max_sq_km"
        );

        let equal = DrishtiConfig::from_json(
            r#"{ "area": { "min_sq_km": 5.0, "max_sq_km": 5.0 } }"#,
        );
        assert!(equal.is_ok());
    }
}
