//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use buildchem::config::Config;
use buildchem::content::{
    Category, ContentStore, DiskBlobStore, Entity, EntityKind, MemoryStore, Product, Record,
    StoreError,
};
use buildchem::schedule::TimerQueue;
use buildchem::server::AppState;
use buildchem::session::SessionGate;
use buildchem::ui::carousel::{Breakpoints, CarouselController, CarouselTiming};
use buildchem::ui::reveal::{BlockId, ObserveError, VisibilityObserver};
use parking_lot::Mutex;
use tempfile::TempDir;
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "s3cret";

pub fn category(slug: &str, name: &str) -> Category {
    Category {
        slug: slug.to_string(),
        name: name.to_string(),
        description: format!("{name} for every site"),
        icon: "🧱".to_string(),
        accent_color: "#FFC510".to_string(),
    }
}

pub fn product(name: &str, category: &str) -> Product {
    Product {
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        applications: vec!["Interior".to_string()],
        badge: None,
        image_url: None,
    }
}

pub fn letters(items: &str) -> Vec<String> {
    items.chars().map(|c| c.to_string()).collect()
}

pub fn timing(interval_ms: u64, resume_ms: u64) -> CarouselTiming {
    CarouselTiming {
        interval: Duration::from_millis(interval_ms),
        resume_delay: Duration::from_millis(resume_ms),
    }
}

/// Carousel over `items` showing `per_view` at a time, on a manual clock.
pub fn carousel(
    items: &str,
    per_view: usize,
) -> (TimerQueue, CarouselController<String, TimerQueue>) {
    let queue = TimerQueue::manual();
    let mut controller = CarouselController::new(
        queue.clone(),
        timing(4000, 5000),
        Breakpoints::default(),
    );
    controller.set_items_per_view(per_view);
    controller.set_items(letters(items));
    (queue, controller)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObserverCall {
    Observe(BlockId, f32),
    Unobserve(BlockId),
}

/// Observer double that records every call. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub calls: Arc<Mutex<Vec<ObserverCall>>>,
    pub unknown: Arc<Mutex<Vec<BlockId>>>,
}

impl RecordingObserver {
    pub fn calls(&self) -> Vec<ObserverCall> {
        self.calls.lock().clone()
    }

    /// Make `observe` fail for `block` as if it were not mounted.
    pub fn forget(&self, block: BlockId) {
        self.unknown.lock().push(block);
    }
}

impl VisibilityObserver for RecordingObserver {
    fn observe(&mut self, block: BlockId, threshold: f32) -> Result<(), ObserveError> {
        if self.unknown.lock().contains(&block) {
            return Err(ObserveError::UnknownBlock(block));
        }
        self.calls
            .lock()
            .push(ObserverCall::Observe(block, threshold));
        Ok(())
    }

    fn unobserve(&mut self, block: BlockId) {
        self.calls.lock().push(ObserverCall::Unobserve(block));
    }
}

/// App state over an in-memory store with a temp media dir.
pub fn app_state(password: Option<&str>) -> (TempDir, AppState) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store: Arc<dyn ContentStore> = Arc::new(MemoryStore::new());
    let media_dir = temp_dir.path().join("media");
    let state = AppState {
        store,
        blobs: Arc::new(DiskBlobStore::new(&media_dir, "/media")),
        sessions: Arc::new(SessionGate::new(password.map(str::to_string))),
        breakpoints: Breakpoints::default(),
        media_dir,
        media_prefix: "/media".to_string(),
    };
    (temp_dir, state)
}

/// Store whose snapshot can never be read.
pub struct UnreadableStore;

impl UnreadableStore {
    fn error() -> StoreError {
        StoreError::Io {
            path: PathBuf::from("/unreadable/content.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }
}

impl ContentStore for UnreadableStore {
    fn list(&self, _kind: EntityKind) -> Result<Vec<Record>, StoreError> {
        Err(Self::error())
    }

    fn get(&self, _kind: EntityKind, _id: Uuid) -> Result<Record, StoreError> {
        Err(Self::error())
    }

    fn create(&self, _entity: Entity) -> Result<Record, StoreError> {
        Err(Self::error())
    }

    fn update(&self, _id: Uuid, _entity: Entity) -> Result<Record, StoreError> {
        Err(Self::error())
    }

    fn delete(&self, _kind: EntityKind, _id: Uuid) -> Result<(), StoreError> {
        Err(Self::error())
    }
}

/// Write `content` as a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
