//! Error types for easylist2dat.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for easylist2dat operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be opened
    #[error("cannot open input {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created
    #[error("cannot create output {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Regex rule that does not compile once URL noise is stripped
    #[error("{source}, from url regexp `{pattern}`")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Regex rule with nothing left once URL noise is stripped
    #[error("empty url regexp `{0}` once stripped")]
    EmptyRegex(String),

    /// Invalid IP address
    #[error("unsupported address for router: {0}")]
    InvalidIpAddress(String),

    /// Invalid CIDR prefix
    #[error("invalid network mask for router: {0}")]
    InvalidCidrPattern(String),

    /// Protobuf encoding failure
    #[error("encoding error: {0}")]
    Encode(#[from] prost::EncodeError),
}

impl Error {
    /// Whether the error only invalidates a single rule.
    ///
    /// Skippable errors are logged and the conversion carries on; every other
    /// error aborts the run.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Error::InvalidRegex { .. }
                | Error::EmptyRegex(_)
                | Error::InvalidIpAddress(_)
                | Error::InvalidCidrPattern(_)
        )
    }
}

/// Result type alias for easylist2dat operations.
pub type Result<T> = std::result::Result<T, Error>;
