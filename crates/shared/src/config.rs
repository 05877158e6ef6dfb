//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report generation configuration.
    #[serde(default)]
    pub reports: ReportsConfig,
    /// Data store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

/// What to do with journal entries whose account number is not in the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Drop the entry and forget about it.
    Ignore,
    /// Drop the entry but keep a warning next to the balance table.
    #[default]
    Collect,
    /// Refuse to produce reports while unmatched entries exist.
    Reject,
}

/// Report generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Maximum debit/credit difference still reported as balanced.
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: Decimal,
    /// Handling of entries that reference unknown accounts.
    #[serde(default)]
    pub unmatched_policy: UnmatchedPolicy,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            balance_tolerance: default_balance_tolerance(),
            unmatched_policy: UnmatchedPolicy::default(),
        }
    }
}

fn default_balance_tolerance() -> Decimal {
    Decimal::from(1000)
}

/// Data store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON snapshot holding accounts, evidence and entries.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Reject journal entries whose account number is not in the chart.
    #[serde(default)]
    pub require_known_account: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            require_known_account: false,
        }
    }
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NERACA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
