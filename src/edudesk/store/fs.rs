use super::ContentStore;
use crate::error::{EdudeskError, Result};
use crate::model::{ContentKey, ContentKind, ContentRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const RECORDS_FILENAME: &str = "records.json";

/// Metadata half of a record; the markdown body lives in its own file so
/// listing never reads content.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordMeta {
    id: Uuid,
    key: ContentKey,
    source_file_name: String,
    is_uploaded: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RecordMeta {
    fn of(record: &ContentRecord) -> Self {
        Self {
            id: record.id,
            key: record.key,
            source_file_name: record.source_file_name.clone(),
            is_uploaded: record.is_uploaded,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    fn into_record(self, content: String) -> ContentRecord {
        ContentRecord {
            id: self.id,
            key: self.key,
            content,
            source_file_name: self.source_file_name,
            is_uploaded: self.is_uploaded,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct FileStore {
    root: PathBuf,
    content_ext: String,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            content_ext: ".md".to_string(),
        }
    }

    pub fn with_content_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.content_ext = ext.to_string();
        } else {
            self.content_ext = format!(".{}", ext);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn content_filename(&self, key: &ContentKey) -> String {
        format!("content-{}{}", key.storage_key(), self.content_ext)
    }

    /// Path to a record's markdown body, whether or not it exists yet.
    pub fn content_path(&self, key: &ContentKey) -> PathBuf {
        self.root.join(self.content_filename(key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(EdudeskError::Io)?;
        }
        Ok(())
    }

    fn load_index(&self) -> Result<HashMap<String, RecordMeta>> {
        let index_file = self.root.join(RECORDS_FILENAME);
        if !index_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(index_file).map_err(EdudeskError::Io)?;
        let index: HashMap<String, RecordMeta> =
            serde_json::from_str(&content).map_err(EdudeskError::Serialization)?;
        Ok(index)
    }

    fn save_index(&self, index: &HashMap<String, RecordMeta>) -> Result<()> {
        let index_file = self.root.join(RECORDS_FILENAME);
        let content = serde_json::to_string_pretty(index).map_err(EdudeskError::Serialization)?;
        fs::write(index_file, content).map_err(EdudeskError::Io)?;
        Ok(())
    }

    fn read_content(&self, key: &ContentKey) -> Result<String> {
        let path = self.content_path(key);
        if !path.exists() {
            // Index entry without a body file reads as empty content.
            return Ok(String::new());
        }
        fs::read_to_string(path).map_err(EdudeskError::Io)
    }
}

impl ContentStore for FileStore {
    fn get(&self, key: &ContentKey) -> Result<ContentRecord> {
        let index = self.load_index()?;
        let meta = index
            .get(&key.storage_key())
            .cloned()
            .ok_or(EdudeskError::RecordNotFound(*key))?;
        let content = self.read_content(key)?;
        Ok(meta.into_record(content))
    }

    fn upsert(&mut self, record: &ContentRecord) -> Result<ContentRecord> {
        self.ensure_dir()?;

        let mut index = self.load_index()?;
        index.insert(record.key.storage_key(), RecordMeta::of(record));
        self.save_index(&index)?;

        fs::write(self.content_path(&record.key), &record.content).map_err(EdudeskError::Io)?;
        Ok(record.clone())
    }

    fn list(&self, subtopic_id: u32) -> Result<Vec<ContentRecord>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let index = self.load_index()?;
        let mut records = Vec::new();
        for meta in index.into_values() {
            if meta.key.subtopic_id != subtopic_id {
                continue;
            }
            // Listing stays on the index; bodies are only read by `get`.
            records.push(meta.into_record(String::new()));
        }
        records.sort_by_key(|r| ContentKind::ALL.iter().position(|k| *k == r.key.kind));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subtopic: u32, kind: ContentKind, content: &str) -> ContentRecord {
        let mut record = ContentRecord::new(ContentKey::new(subtopic, kind));
        record.content = content.to_string();
        record.is_uploaded = true;
        record
    }

    #[test]
    fn upsert_then_get_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let saved = record(1, ContentKind::Book, "# Algebra\n\nBody.");
        store.upsert(&saved).unwrap();

        let loaded = store.get(&saved.key).unwrap();
        assert_eq!(loaded.content, "# Algebra\n\nBody.");
        assert_eq!(loaded.id, saved.id);
        assert!(loaded.is_uploaded);
    }

    #[test]
    fn get_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let key = ContentKey::new(9, ContentKind::Book);
        assert!(matches!(
            store.get(&key),
            Err(EdudeskError::RecordNotFound(k)) if k == key
        ));
    }

    #[test]
    fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let key = ContentKey::new(2, ContentKind::AiNotes);
        {
            let mut store = FileStore::new(dir.path());
            store.upsert(&record(2, ContentKind::AiNotes, "notes")).unwrap();
        }
        let store = FileStore::new(dir.path());
        assert_eq!(store.get(&key).unwrap().content, "notes");
    }

    #[test]
    fn missing_body_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let saved = record(1, ContentKind::Book, "body");
        store.upsert(&saved).unwrap();

        fs::remove_file(store.content_path(&saved.key)).unwrap();
        let loaded = store.get(&saved.key).unwrap();
        assert_eq!(loaded.content, "");
    }

    #[test]
    fn list_returns_only_the_requested_subtopic() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        for kind in ContentKind::ALL {
            store.upsert(&record(1, kind, "one")).unwrap();
        }
        store.upsert(&record(2, ContentKind::Book, "two")).unwrap();

        let records = store.list(1).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.key.subtopic_id == 1));
    }

    #[test]
    fn list_reads_only_the_metadata_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let saved = record(1, ContentKind::Book, "body");
        store.upsert(&saved).unwrap();

        // Make the body unreadable as text: `get` would fail on this,
        // `list` must not touch it.
        fs::remove_file(store.content_path(&saved.key)).unwrap();
        fs::create_dir(store.content_path(&saved.key)).unwrap();

        let records = store.list(1).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].content.is_empty());
        assert!(records[0].is_uploaded);
    }

    #[test]
    fn list_on_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.list(1).unwrap().is_empty());
    }

    #[test]
    fn content_ext_is_normalized() {
        let store = FileStore::new("/tmp/x").with_content_ext("markdown");
        let key = ContentKey::new(1, ContentKind::Book);
        assert!(store
            .content_path(&key)
            .to_string_lossy()
            .ends_with("content-1-book.markdown"));
    }
}
