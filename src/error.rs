// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::MetadataKind;

/// Errors raised while locating, matching, or building a query.
///
/// Every variant is fatal for a run; the binary maps all of them to exit
/// status 1.
#[derive(Error, Debug)]
pub enum FieldUsageError {
    /// A path referenced by the traversal did not exist when it was checked.
    #[error("Invalid path: {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// No candidate file satisfied the usage predicate.
    #[error("\"{field}\" is not used in any {kind}s [strict={strict}]")]
    NoMatches {
        field: String,
        kind: MetadataKind,
        strict: bool,
    },

    /// No query template is registered for the metadata kind.
    #[error("{kind} is not supported")]
    UnsupportedKind { kind: MetadataKind },

    /// A file or directory exists but could not be read.
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FieldUsageError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidPath { .. }
            | Self::NoMatches { .. }
            | Self::UnsupportedKind { .. }
            | Self::Io { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FieldUsageError>;
