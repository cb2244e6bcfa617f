//! # Error Types Module
//!
//! Centralized error handling for the SafeLink application.
//!
//! ## Error Types
//! - `ConfigError`: Configuration file I/O and parsing errors
//! - `ValidationError`: Required form fields left empty
//!
//! Nothing in the app talks to a network or a device, so these are the only
//! two ways an operation can fail. Config failures are logged and the UI keeps
//! running with defaults; validation failures are shown inline and as a toast.

use crate::form::Field;
use std::fmt;

/// Errors that can occur during configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read config file
    ReadFailed(std::io::Error),
    /// Failed to write config file
    WriteFailed(std::io::Error),
    /// Failed to parse config file
    ParseFailed(toml::de::Error),
    /// Failed to serialize config
    SerializeFailed(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFailed(e) => {
                write!(f, "Failed to read config file: {}", e)
            }
            ConfigError::WriteFailed(e) => {
                write!(f, "Failed to write config file: {}", e)
            }
            ConfigError::ParseFailed(e) => {
                write!(f, "Failed to parse config file: {}", e)
            }
            ConfigError::SerializeFailed(e) => {
                write!(f, "Failed to serialize config: {}", e)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadFailed(e) => Some(e),
            ConfigError::WriteFailed(e) => Some(e),
            ConfigError::ParseFailed(e) => Some(e),
            ConfigError::SerializeFailed(e) => Some(e),
        }
    }
}

/// Errors raised when a form is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were empty (after trimming)
    MissingFields(Vec<Field>),
}

impl ValidationError {
    /// Fields that failed validation, in form order
    pub fn fields(&self) -> &[Field] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields(_) => write!(f, "Please fill in all fields"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_chain() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::ReadFailed(io_err);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingFields(vec![Field::Name, Field::Phone]);
        assert_eq!(err.to_string(), "Please fill in all fields");
        assert_eq!(err.fields(), &[Field::Name, Field::Phone]);
    }
}
