//! Settings for the `stack_demo` walkthrough, read from TOML.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Seed for the random sample pushed in the LIFO walkthrough.
    pub seed: u64,
    /// How many random values to push.
    pub sample_size: usize,
    /// Names pushed in the string-stack walkthrough, bottom first.
    pub names: Vec<String>,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            seed: 42,
            sample_size: 8,
            names: ["Lucas", "Remo", "Anderson", "João"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            color: true,
        }
    }
}

impl DemoConfig {
    pub const MAX_SAMPLE_SIZE: usize = 1024;

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        debug!(
            seed = config.seed,
            sample_size = config.sample_size,
            names = config.names.len(),
            "loaded demo config"
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size == 0 || self.sample_size > Self::MAX_SAMPLE_SIZE {
            return Err(ConfigError::invalid_value(
                "sample_size",
                format!("must be between 1 and {}", Self::MAX_SAMPLE_SIZE),
            ));
        }
        if self.names.is_empty() {
            return Err(ConfigError::invalid_value("names", "must list at least one name"));
        }
        if let Some(position) = self.names.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::invalid_value(
                "names",
                format!("entry {} is blank", position),
            ));
        }
        Ok(())
    }
}
