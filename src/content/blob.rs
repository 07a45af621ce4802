//! Uploaded media storage.

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Invalid upload path '{0}'")]
    InvalidPath(String),

    #[error("Upload is empty")]
    Empty,

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredBlob {
    /// Path relative to the media root, `/`-separated.
    pub path: String,
    /// Public URL under the media prefix.
    pub url: String,
}

pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `folder` and returns its location. The file
    /// name is sanitized and prefixed with the upload time so repeated
    /// uploads never collide.
    fn put(&self, folder: &str, filename: &str, bytes: &[u8]) -> Result<StoredBlob, BlobError>;
}

/// Writes uploads below a directory that is also served statically.
#[derive(Debug, Clone)]
pub struct DiskBlobStore {
    root: PathBuf,
    url_prefix: String,
}

impl DiskBlobStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            url_prefix,
        }
    }
}

impl BlobStore for DiskBlobStore {
    fn put(&self, folder: &str, filename: &str, bytes: &[u8]) -> Result<StoredBlob, BlobError> {
        if bytes.is_empty() {
            return Err(BlobError::Empty);
        }
        check_segment(folder)?;
        check_segment(filename)?;

        let name = format!(
            "{}_{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(filename)
        );
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).map_err(|source| BlobError::Io {
            path: dir.clone(),
            source,
        })?;
        let target = dir.join(&name);
        fs::write(&target, bytes).map_err(|source| BlobError::Io {
            path: target.clone(),
            source,
        })?;

        let path = format!("{folder}/{name}");
        tracing::info!(path = %path, size = bytes.len(), "upload stored");
        Ok(StoredBlob {
            url: format!("{}/{}", self.url_prefix, path),
            path,
        })
    }
}

/// A single relative path component with no traversal.
fn check_segment(segment: &str) -> Result<(), BlobError> {
    let invalid = || BlobError::InvalidPath(segment.to_string());
    if segment.is_empty() || segment.contains("..") || segment.contains(['/', '\\']) {
        return Err(invalid());
    }
    let mut components = Path::new(segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

/// Keeps ASCII letters, digits, `.`, `-` and `_`. Everything else becomes `_`.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
