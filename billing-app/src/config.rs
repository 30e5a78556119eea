//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use billing_types::{ChannelConfig, DispatchMode};

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub seed_file: Option<PathBuf>,
    pub channels: ChannelConfig,
    pub dispatch_mode: DispatchMode,
    pub publish_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Loads configuration through a variable lookup function.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            var(key).ok_or_else(|| anyhow::anyhow!("{} environment variable is required", key))
        };

        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;

        let database_url = required("DATABASE_URL")?;
        let seed_file = var("SEED_FILE").map(PathBuf::from);

        let channels = ChannelConfig::new(
            required("PARTIAL_QUEUE_URL")?,
            required("FULL_QUEUE_URL")?,
            required("OVERPAID_QUEUE_URL")?,
        )?;

        let dispatch_mode = match var("DISPATCH_MODE") {
            Some(mode) => mode.parse()?,
            None => DispatchMode::default(),
        };

        let publish_timeout = Duration::from_secs(
            var("PUBLISH_TIMEOUT_SECS")
                .unwrap_or_else(|| "10".to_string())
                .parse()?,
        );

        Ok(Self {
            port,
            database_url,
            seed_file,
            channels,
            dispatch_mode,
            publish_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_types::PaymentStatus;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base() -> HashMap<String, String> {
        vars(&[
            ("DATABASE_URL", "memory://"),
            ("PARTIAL_QUEUE_URL", "http://queues/partial"),
            ("FULL_QUEUE_URL", "http://queues/full"),
            ("OVERPAID_QUEUE_URL", "http://queues/overpaid"),
        ])
    }

    #[test]
    fn test_defaults() {
        let env = base();
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.dispatch_mode, DispatchMode::FailFast);
        assert_eq!(config.publish_timeout, Duration::from_secs(10));
        assert!(config.seed_file.is_none());
        assert_eq!(
            config.channels.channel_for(PaymentStatus::Overpaid),
            "http://queues/overpaid"
        );
    }

    #[test]
    fn test_overrides() {
        let mut env = base();
        env.extend(vars(&[
            ("PORT", "8081"),
            ("DISPATCH_MODE", "validate_first"),
            ("PUBLISH_TIMEOUT_SECS", "2"),
            ("SEED_FILE", "seed.json"),
        ]));
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.dispatch_mode, DispatchMode::ValidateFirst);
        assert_eq!(config.publish_timeout, Duration::from_secs(2));
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_missing_queue_url_fails() {
        let mut env = base();
        env.remove("FULL_QUEUE_URL");

        let err = Config::from_vars(|k| env.get(k).cloned()).err().unwrap();

        assert!(err.to_string().contains("FULL_QUEUE_URL"));
    }

    #[test]
    fn test_shared_queue_url_fails() {
        let mut env = base();
        env.insert("FULL_QUEUE_URL".into(), "http://queues/partial".into());

        assert!(Config::from_vars(|k| env.get(k).cloned()).is_err());
    }
}
