use crate::core::{DEFAULT_ACTIONS, DEFAULT_USERS};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_STREAM_NAME: &str = "user-activity-stream";
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub region: String,
    pub stream_name: String,
    pub users: Vec<String>,
    pub actions: Vec<String>,
    pub interval_ms: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            stream_name: DEFAULT_STREAM_NAME.to_string(),
            users: DEFAULT_USERS.iter().map(|u| u.to_string()).collect(),
            actions: DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect(),
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("stream name must not be empty")]
    EmptyStreamName,
    #[error("at least one user id is required")]
    NoUsers,
    #[error("at least one action is required")]
    NoActions,
    #[error("publish interval must be greater than zero")]
    ZeroInterval,
}

impl Configuration {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Configuration::default()))
            // .merge overrides the defaults with anything set in the environment
            .merge(Env::prefixed("APP_"))
            .extract()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.stream_name.trim().is_empty() {
            return Err(ConfigurationError::EmptyStreamName);
        }
        if self.users.is_empty() {
            return Err(ConfigurationError::NoUsers);
        }
        if self.actions.is_empty() {
            return Err(ConfigurationError::NoActions);
        }
        if self.interval_ms == 0 {
            return Err(ConfigurationError::ZeroInterval);
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stream {} in {} every {}ms",
            self.stream_name, self.region, self.interval_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Configuration, ConfigurationError};
    use std::time::Duration;

    #[test]
    fn when_environment_is_empty_should_use_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = Configuration::load()?;

            assert_eq!(config, Configuration::default());
            assert_eq!(config.region, "us-east-1");
            assert_eq!(config.stream_name, "user-activity-stream");
            assert_eq!(config.users, vec!["u1", "u2", "u3"]);
            assert_eq!(config.actions, vec!["login", "click", "logout"]);
            assert_eq!(config.interval(), Duration::from_secs(1));

            Ok(())
        });
    }

    #[test]
    fn when_prefixed_env_vars_are_set_should_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APP_STREAM_NAME", "james-test-stream");
            jail.set_env("APP_REGION", "eu-west-1");
            jail.set_env("APP_INTERVAL_MS", "250");

            let config = Configuration::load()?;

            assert_eq!(config.stream_name, "james-test-stream");
            assert_eq!(config.region, "eu-west-1");
            assert_eq!(config.interval(), Duration::from_millis(250));
            assert_eq!(config.users, vec!["u1", "u2", "u3"]);

            Ok(())
        });
    }

    #[test]
    fn when_pools_are_set_from_env_should_parse_arrays() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APP_USERS", "[u7, u8]");
            jail.set_env("APP_ACTIONS", "[purchase]");

            let config = Configuration::load()?;

            assert_eq!(config.users, vec!["u7", "u8"]);
            assert_eq!(config.actions, vec!["purchase"]);

            Ok(())
        });
    }

    #[test]
    fn when_defaults_are_used_should_validate() {
        assert_eq!(Configuration::default().validate(), Ok(()));
    }

    #[test]
    fn when_values_are_missing_should_fail_validation() {
        let mut config = Configuration::default();
        config.stream_name = "  ".into();
        assert_eq!(config.validate(), Err(ConfigurationError::EmptyStreamName));

        let mut config = Configuration::default();
        config.users.clear();
        assert_eq!(config.validate(), Err(ConfigurationError::NoUsers));

        let mut config = Configuration::default();
        config.actions.clear();
        assert_eq!(config.validate(), Err(ConfigurationError::NoActions));

        let mut config = Configuration::default();
        config.interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigurationError::ZeroInterval));
    }
}
