//! Catalog content: categories, products and blog posts.
//!
//! - `model.rs` - Entities, records and collection kinds
//! - `store.rs` - Storage seam and the in-memory store
//! - `validate.rs` - Normalization before writes
//! - `query.rs` - Sorted and filtered read models
//! - `blob.rs` - Uploaded media
//! - `seed.rs` - Demo catalog

mod blob;
mod error;
mod model;
pub mod query;
pub mod seed;
mod store;
mod validate;

pub use blob::{sanitize_filename, BlobError, BlobStore, DiskBlobStore, StoredBlob};
pub use error::StoreError;
pub use model::{split_list, BlogPost, Category, Entity, EntityKind, Product, Record, UnknownKind};
pub use store::{ContentStore, MemoryStore};
