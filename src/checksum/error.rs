use crate::checksum::Algorithm;
use std::{error::Error, fmt, io};

/// Errors surfaced by the checksum engine.
///
/// Backend problems are reported once, when an engine is constructed.
/// Range problems are reported before any byte is read, so a rejected update
/// never changes the running value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    /// The backend for `algorithm` cannot be used under the active policy.
    BackendUnavailable {
        algorithm: Algorithm,
        reason: &'static str,
    },

    /// `offset..offset + length` does not fit inside a buffer of `available` bytes.
    InvalidRange {
        offset: usize,
        length: usize,
        available: usize,
    },

    /// A chunk size of zero would never make progress.
    InvalidChunkSize(usize),

    /// A configuration value could not be parsed.
    InvalidConfig { key: String, value: String },
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackendUnavailable { algorithm, reason } => {
                write!(f, "{algorithm} backend unavailable: {reason}")
            }
            Self::InvalidRange {
                offset,
                length,
                available,
            } => write!(
                f,
                "range {offset}+{length} is out of bounds for a buffer of {available} bytes"
            ),
            Self::InvalidChunkSize(size) => {
                write!(f, "chunk size must be greater than zero (got {size})")
            }
            Self::InvalidConfig { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl Error for ChecksumError {}

impl From<ChecksumError> for io::Error {
    fn from(err: ChecksumError) -> Self {
        let kind = match err {
            ChecksumError::BackendUnavailable { .. } => io::ErrorKind::Unsupported,
            _ => io::ErrorKind::InvalidInput,
        };

        io::Error::new(kind, err)
    }
}
