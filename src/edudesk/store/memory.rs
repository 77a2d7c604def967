use super::ContentStore;
use crate::error::{EdudeskError, Result};
use crate::model::{ContentKey, ContentRecord};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<ContentKey, ContentRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ContentStore for InMemoryStore {
    fn get(&self, key: &ContentKey) -> Result<ContentRecord> {
        self.records
            .get(key)
            .cloned()
            .ok_or(EdudeskError::RecordNotFound(*key))
    }

    fn upsert(&mut self, record: &ContentRecord) -> Result<ContentRecord> {
        self.records.insert(record.key, record.clone());
        Ok(record.clone())
    }

    fn list(&self, subtopic_id: u32) -> Result<Vec<ContentRecord>> {
        let mut records: Vec<ContentRecord> = self
            .records
            .values()
            .filter(|r| r.key.subtopic_id == subtopic_id)
            .map(|r| {
                let mut listed = r.clone();
                listed.content = String::new();
                listed
            })
            .collect();
        records.sort_by_key(|r| {
            crate::model::ContentKind::ALL
                .iter()
                .position(|k| *k == r.key.kind)
        });
        Ok(records)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContentKind;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds all three kinds for a subtopic as uploaded content.
        pub fn with_uploaded_subtopic(mut self, subtopic_id: u32, source: &str) -> Self {
            for kind in ContentKind::ALL {
                let mut record = ContentRecord::new(ContentKey::new(subtopic_id, kind));
                record.content = format!("# {}\n\nSeed content from {}.", kind.label(), source);
                record.source_file_name = format!("{}_{}.md", source, kind.slug());
                record.is_uploaded = true;
                self.store.upsert(&record).unwrap();
            }
            self
        }

        /// Seeds a single record with the given body.
        pub fn with_record(mut self, subtopic_id: u32, kind: ContentKind, content: &str) -> Self {
            let mut record = ContentRecord::new(ContentKey::new(subtopic_id, kind));
            record.content = content.to_string();
            record.is_uploaded = !content.is_empty();
            self.store.upsert(&record).unwrap();
            self
        }

        /// Seeds an empty, not-uploaded placeholder for a key.
        pub fn with_placeholder(mut self, subtopic_id: u32, kind: ContentKind) -> Self {
            let record = ContentRecord::new(ContentKey::new(subtopic_id, kind));
            self.store.upsert(&record).unwrap();
            self
        }
    }
}
