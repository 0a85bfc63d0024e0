//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use callchooser_navigation::NavigatorOptions;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keep the call log stack alive alongside other top level sections
    pub can_top_level_routes_exist_together: bool,
    /// Dump the navigation stacks after every change
    pub debug_navigation: bool,
    /// Shortest query that triggers a contact search
    pub min_query_len: usize,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Config {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&contents)?;

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration");

        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_query_len == 0 {
            return Err(CoreError::Config(
                "min_query_len must be at least 1".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log_filter cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn navigator_options(&self) -> NavigatorOptions {
        NavigatorOptions {
            can_top_level_routes_exist_together: self.can_top_level_routes_exist_together,
            debug_logging: self.debug_navigation,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            can_top_level_routes_exist_together: false,
            debug_navigation: false,
            min_query_len: 2,
            log_filter: "info".to_string(),
        }
    }
}
