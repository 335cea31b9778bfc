//! Error types for the card store.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::CardId;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("card not found: {0}")]
    NotFound(CardId),

    #[error("database request failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// Returns true for lookups that found no row.
    ///
    /// Navigation treats these as no-ops rather than failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
