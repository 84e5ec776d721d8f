//! Error types for report generation

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a report from being produced.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Please provide a valid JSON path")]
    MissingInputOption,

    #[error("Failed to read lint output {}: {source}", path.display())]
    InputReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in lint output: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The document parsed, but the top level is not an array.
    #[error("JSON format is not valid: expected an array, found {0}")]
    InvalidFormat(&'static str),

    #[error("Failed to read template {}: {source}", path.display())]
    TemplateReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
