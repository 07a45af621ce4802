//! Content storage.
//!
//! [`ContentStore`] is the seam between the site and its backing database.
//! [`MemoryStore`] keeps everything in memory and optionally mirrors each
//! mutation to a JSON snapshot on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::StoreError;
use super::model::{Entity, EntityKind, Record};
use super::validate::prepare;

/// CRUD over catalog records.
///
/// `list` returns records in insertion order. Creates and updates are
/// validated and normalized before they are stored.
pub trait ContentStore: Send + Sync {
    fn list(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError>;

    fn get(&self, kind: EntityKind, id: Uuid) -> Result<Record, StoreError>;

    fn create(&self, entity: Entity) -> Result<Record, StoreError>;

    /// Replaces the entity of an existing record, keeping `created_at`.
    fn update(&self, id: Uuid, entity: Entity) -> Result<Record, StoreError>;

    fn delete(&self, kind: EntityKind, id: Uuid) -> Result<(), StoreError>;

    fn count(&self, kind: EntityKind) -> Result<usize, StoreError> {
        Ok(self.list(kind)?.len())
    }
}

impl<T: ContentStore + ?Sized> ContentStore for Arc<T> {
    fn list(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError> {
        (**self).list(kind)
    }

    fn get(&self, kind: EntityKind, id: Uuid) -> Result<Record, StoreError> {
        (**self).get(kind, id)
    }

    fn create(&self, entity: Entity) -> Result<Record, StoreError> {
        (**self).create(entity)
    }

    fn update(&self, id: Uuid, entity: Entity) -> Result<Record, StoreError> {
        (**self).update(id, entity)
    }

    fn delete(&self, kind: EntityKind, id: Uuid) -> Result<(), StoreError> {
        (**self).delete(kind, id)
    }

    fn count(&self, kind: EntityKind) -> Result<usize, StoreError> {
        (**self).count(kind)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    records: Vec<Record>,
}

/// In-memory store with optional JSON persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Snapshot>,
    path: Option<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a store backed by `path`. A missing file starts empty; the
    /// file is written on the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let snapshot = if path.exists() {
            let bytes = fs::read(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                path: path.clone(),
                source,
            })?
        } else {
            Snapshot::default()
        };
        tracing::info!(
            path = %path.display(),
            records = snapshot.records.len(),
            "content store opened"
        );
        Ok(Self {
            inner: RwLock::new(snapshot),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes to a sibling temp file, then renames over the snapshot.
    fn persist(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(snapshot).map_err(StoreError::Encode)?;
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}

impl ContentStore for MemoryStore {
    fn list(&self, kind: EntityKind) -> Result<Vec<Record>, StoreError> {
        let snapshot = self.inner.read();
        Ok(snapshot
            .records
            .iter()
            .filter(|r| r.kind() == kind)
            .cloned()
            .collect())
    }

    fn get(&self, kind: EntityKind, id: Uuid) -> Result<Record, StoreError> {
        let snapshot = self.inner.read();
        snapshot
            .records
            .iter()
            .find(|r| r.id == id && r.kind() == kind)
            .cloned()
            .ok_or(StoreError::NotFound { kind, id })
    }

    fn create(&self, entity: Entity) -> Result<Record, StoreError> {
        let mut snapshot = self.inner.write();
        let entity = prepare(entity, snapshot.records.as_slice(), None)?;
        let now = Utc::now();
        let record = Record {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            entity,
        };
        snapshot.records.push(record.clone());
        if let Err(err) = self.persist(&snapshot) {
            snapshot.records.pop();
            return Err(err);
        }
        tracing::info!(kind = %record.kind(), id = %record.id, "record created");
        Ok(record)
    }

    fn update(&self, id: Uuid, entity: Entity) -> Result<Record, StoreError> {
        let mut snapshot = self.inner.write();
        let kind = entity.kind();
        let position = snapshot
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound { kind, id })?;
        let found = snapshot.records[position].kind();
        if found != kind {
            return Err(StoreError::KindMismatch {
                id,
                expected: kind,
                found,
            });
        }

        let entity = prepare(entity, snapshot.records.as_slice(), Some(id))?;
        let previous = snapshot.records[position].clone();
        let updated = Record {
            updated_at: Utc::now(),
            entity,
            ..previous.clone()
        };
        snapshot.records[position] = updated.clone();
        if let Err(err) = self.persist(&snapshot) {
            snapshot.records[position] = previous;
            return Err(err);
        }
        tracing::info!(kind = %kind, id = %id, "record updated");
        Ok(updated)
    }

    fn delete(&self, kind: EntityKind, id: Uuid) -> Result<(), StoreError> {
        let mut snapshot = self.inner.write();
        let position = snapshot
            .records
            .iter()
            .position(|r| r.id == id && r.kind() == kind)
            .ok_or(StoreError::NotFound { kind, id })?;
        let removed = snapshot.records.remove(position);
        if let Err(err) = self.persist(&snapshot) {
            snapshot.records.insert(position, removed);
            return Err(err);
        }
        tracing::info!(kind = %kind, id = %id, "record deleted");
        Ok(())
    }

    fn count(&self, kind: EntityKind) -> Result<usize, StoreError> {
        Ok(self
            .inner
            .read()
            .records
            .iter()
            .filter(|r| r.kind() == kind)
            .count())
    }
}
