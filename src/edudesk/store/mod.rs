//! # Storage Layer
//!
//! This module defines the storage abstraction for edudesk. The
//! [`ContentStore`] trait lets the controller work against different
//! backends without caring about persistence details.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, platform API) without changing
//!   the editor controller
//!
//! ## Contract
//!
//! The store holds at most one [`ContentRecord`] per composite
//! [`ContentKey`] (subtopic, kind). All operations address records by that
//! key, never by record id. `upsert` takes a full record and is idempotent
//! by key; partial updates are never merged. Last-writer-wins is the only
//! guarantee (single administrative user in scope).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Record metadata in `records.json`, keyed by the flat storage key
//!   - Markdown bodies in individual files: `content-{subtopic}-{slug}.md`
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! Metadata and content are stored separately so the topics overview can
//! list records without reading every content file.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── records.json                # Metadata index (JSON object)
//! ├── content-1-book.md           # Individual record bodies
//! ├── content-1-ai-notes.md
//! ├── config.json                 # Console configuration
//! └── topics.json                 # Optional catalog override
//! ```

use crate::error::Result;
use crate::model::{ContentKey, ContentRecord};

pub mod fs;
pub mod memory;

/// Abstract interface for content record storage.
pub trait ContentStore {
    /// Get the record for a composite key. Absence is a typed
    /// `RecordNotFound` error; callers that want lazy creation recover
    /// from it explicitly.
    fn get(&self, key: &ContentKey) -> Result<ContentRecord>;

    /// Insert or replace the record for `record.key`. Always takes a full
    /// record; returns the stored value.
    fn upsert(&mut self, record: &ContentRecord) -> Result<ContentRecord>;

    /// All records attached to one subtopic, in kind order where the
    /// backend can provide it. Listing is a metadata view: returned
    /// records carry an empty `content` body; use [`ContentStore::get`]
    /// for the full record.
    fn list(&self, subtopic_id: u32) -> Result<Vec<ContentRecord>>;
}
