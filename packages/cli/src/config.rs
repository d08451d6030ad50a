//! Runtime configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `ECOMIND_DATASET` | Path to a records JSON file | embedded fixture |
//! | `ECOMIND_LOCATIONS` | Path to a location catalog TOML file | embedded catalog |
//! | `ECOMIND_NOTIFICATIONS` | Path to a notification feed JSON file | embedded feed |
//! | `ECOMIND_SIMULATION_DELAY_MS` | Assistant "thinking" delay | `1000` |

use std::path::PathBuf;
use std::time::Duration;

use ecomind_dashboard::DashboardError;
use ecomind_dashboard::notifications::NotificationFeed;
use ecomind_dataset::catalog::LocationCatalog;
use ecomind_dataset::{Dataset, DatasetError};

/// Assistant delay used when `ECOMIND_SIMULATION_DELAY_MS` is unset or
/// unparseable.
pub const DEFAULT_SIMULATION_DELAY_MS: u64 = 1000;

/// Settings for a CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Records file to load instead of the embedded fixture.
    pub dataset_path: Option<PathBuf>,
    /// Catalog file to load instead of the embedded catalog.
    pub locations_path: Option<PathBuf>,
    /// Notification feed to load instead of the embedded feed.
    pub notifications_path: Option<PathBuf>,
    /// How long the assistant spinner runs before a reply is shown.
    pub simulation_delay: Duration,
}

impl CliConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        let delay_ms = lookup("ECOMIND_SIMULATION_DELAY_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_SIMULATION_DELAY_MS);

        Self {
            dataset_path: path("ECOMIND_DATASET"),
            locations_path: path("ECOMIND_LOCATIONS"),
            notifications_path: path("ECOMIND_NOTIFICATIONS"),
            simulation_delay: Duration::from_millis(delay_ms),
        }
    }

    /// Loads the configured dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or fails
    /// validation.
    pub fn load_dataset(&self) -> Result<Dataset, DatasetError> {
        match &self.dataset_path {
            Some(path) => Dataset::from_path(path),
            None => Dataset::embedded(),
        }
    }

    /// Loads the configured location catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<LocationCatalog, DatasetError> {
        match &self.locations_path {
            Some(path) => LocationCatalog::from_path(path),
            None => LocationCatalog::embedded(),
        }
    }

    /// Loads the configured notification feed.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the file cannot be read or parsed.
    pub fn load_notifications(&self) -> Result<NotificationFeed, DashboardError> {
        match &self.notifications_path {
            Some(path) => NotificationFeed::from_path(path),
            None => NotificationFeed::embedded(),
        }
    }
}
