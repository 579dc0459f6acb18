//! Settings-specific error handling.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving [`Settings`](super::Settings).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A value could not be coerced to an integer field.
    #[error("Invalid value for {field}: {value:?} is not a valid integer")]
    InvalidInteger {
        /// Name of the offending field.
        field: &'static str,
        /// Raw value as provided.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A value falls outside a field's closed set of choices.
    #[error("Invalid value for {field}: {value:?} is not one of {allowed}")]
    InvalidChoice {
        /// Name of the offending field.
        field: &'static str,
        /// Raw value as provided.
        value: String,
        /// Accepted values, `|`-separated.
        allowed: String,
    },

    /// The local override file exists but could not be read or parsed.
    #[error("Failed to read env file: {}", path.display())]
    EnvFile {
        /// Path of the override file.
        path: PathBuf,
        /// Underlying read or parse failure.
        #[source]
        source: dotenvy::Error,
    },
}

impl SettingsError {
    /// Returns true when a provided value failed validation or coercion.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInteger { .. } | Self::InvalidChoice { .. }
        )
    }
}
