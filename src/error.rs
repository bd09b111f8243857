use thiserror::Error;

// =============================================================================
// Container errors
// =============================================================================

/// Precondition violations reported by the [`Container`](crate::Container) contract.
///
/// Emptiness is not an error: `pop`/`top` return `None` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("index out of bounds: the count is {count} but the index is {index}")]
    IndexOutOfBounds { index: usize, count: usize },
}

impl ContainerError {
    pub fn out_of_bounds(index: usize, count: usize) -> Self {
        Self::IndexOutOfBounds { index, count }
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.message().to_string(),
        }
    }
}
