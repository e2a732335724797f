//! Error types for the SCT list codec.

use std::fmt;

use thiserror::Error;

/// A field of the SCT list wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ListLength,
    List,
    RecordLength,
    Record,
    Version,
    LogId,
    Timestamp,
    ExtensionsLength,
    Extensions,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListLength => write!(f, "list length"),
            Self::List => write!(f, "SCT list"),
            Self::RecordLength => write!(f, "record length"),
            Self::Record => write!(f, "SCT record"),
            Self::Version => write!(f, "version"),
            Self::LogId => write!(f, "log ID"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::ExtensionsLength => write!(f, "extensions length"),
            Self::Extensions => write!(f, "extensions"),
        }
    }
}

/// Why a buffer could not be decoded as an SCT list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// Fewer bytes remain than `field` needs.
    Truncated { field: Field, available: usize },
    /// Bytes remain after the length the list declared.
    TrailingData { declared: usize, remaining: usize },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { field, available } => {
                write!(f, "{field} is truncated ({available} bytes available)")
            }
            Self::TrailingData {
                declared,
                remaining,
            } => write!(
                f,
                "list declares {declared} bytes but {remaining} more bytes follow it"
            ),
        }
    }
}

/// Errors produced while decoding or encoding an SCT list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed SCT list: {0}")]
    MalformedInput(Malformed),

    #[error("invalid SCT record: {0}")]
    InvalidRecord(String),

    #[error("{field} of {length} bytes does not fit in a 16-bit length field")]
    EncodingOverflow { field: Field, length: usize },

    #[error("extension value: {0}")]
    Envelope(#[from] der::error::Error),
}

impl From<Malformed> for Error {
    fn from(reason: Malformed) -> Self {
        Error::MalformedInput(reason)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
