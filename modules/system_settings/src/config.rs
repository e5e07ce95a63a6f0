//! Configuration for system settings module

use serde::Deserialize;
use std::time::Duration;

/// System settings configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seconds between cache refreshes from the database
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Run schema migrations during init
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            run_migrations: true,
        }
    }
}

impl Config {
    /// Parse the module section of a YAML config file
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Refresh period, never shorter than one second
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

fn default_refresh_interval_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}
