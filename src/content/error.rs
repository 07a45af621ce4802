use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use super::model::EntityKind;

/// Errors from content store reads and writes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} record {id} not found")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("{kind} slug '{slug}' is already taken")]
    DuplicateSlug { kind: EntityKind, slug: String },

    #[error("Category '{0}' does not exist")]
    UnknownCategory(String),

    #[error("Record {id} is a {found} record, not {expected}")]
    KindMismatch {
        id: Uuid,
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("Failed to access snapshot '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode snapshot '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn required(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: "must not be empty".to_string(),
        }
    }
}
