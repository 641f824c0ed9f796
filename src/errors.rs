//! Error types for batch_lemmatizer
//!
//! Every failure is fatal to a batch run, so the taxonomy is deliberately
//! small: configuration problems, file-system problems, and analysis
//! failures inside the pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LemmatizerError>;

/// Main error type for batch_lemmatizer
#[derive(Error, Debug)]
pub enum LemmatizerError {
    /// Bad profile choice or invalid configuration value
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Missing or unreadable input, or unwritable output
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pipeline component failed while analyzing text
    #[error("Pipeline error in stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// Report or config (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl LemmatizerError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error tagged with the offending path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a pipeline error for the named stage
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Process exit code used by the command-line driver
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Pipeline { .. } => 4,
            Self::Serialization { .. } => 1,
        }
    }
}

impl From<serde_json::Error> for LemmatizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LemmatizerError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("failed to parse config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LemmatizerError::config("unsupported profile '9'");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("'9'"));

        let err = LemmatizerError::pipeline("lemmatizer", "boom");
        assert_eq!(err.to_string(), "Pipeline error in stage 'lemmatizer': boom");
    }

    #[test]
    fn test_io_error_carries_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = LemmatizerError::io("/tmp/nowhere.txt", source);
        assert!(err.to_string().contains("/tmp/nowhere.txt"));
        assert!(err.to_string().contains("missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LemmatizerError::config("x").exit_code(), 2);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "x");
        assert_eq!(LemmatizerError::io("a", io).exit_code(), 3);
        assert_eq!(LemmatizerError::pipeline("ner", "x").exit_code(), 4);
    }

    #[test]
    fn test_toml_error_is_config() {
        let err: LemmatizerError = toml::from_str::<toml::Table>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, LemmatizerError::Config { .. }));
    }
}
