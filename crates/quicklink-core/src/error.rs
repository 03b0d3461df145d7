//! Error taxonomy for mapping store operations.

use std::io;
use std::path::PathBuf;

/// Error returned by [`crate::MappingStore`] operations.
///
/// None of these are fatal: the caller reports the message and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input URL was empty after trimming whitespace.
    #[error("please enter a valid long URL")]
    Validation,

    /// No mapping exists for the given short token.
    #[error("short URL not found: {token}")]
    NotFound { token: String },

    /// Reading, appending to, or rewriting the mappings file failed.
    #[error("{action} {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn not_found(token: &str) -> Self {
        StoreError::NotFound {
            token: token.to_string(),
        }
    }

    pub(crate) fn persistence(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Persistence {
            action,
            path: path.into(),
            source,
        }
    }
}
