//! The editor controller: the state machine guarding unsaved edits and
//! keeping the draft in sync with the content store.
//!
//! Every navigation-class intent (subtopic change, kind change, edit-mode
//! exit, reset-upload) funnels through the same dirty-check gate, so one
//! confirmation mechanism governs every loss-of-work path. `save` and
//! `cancel_edit` are the only resolving actions; both flush any deferred
//! navigation afterward, so no accepted navigation request is lost.
//!
//! Nothing in here is fatal: a missing record is fabricated empty, a
//! failed read or fetch is absorbed into placeholder content, and a fetch
//! that resolves after the view moved on is discarded.

use crate::catalog::TopicCatalog;
use crate::derive::{derive_or_fallback, derived_file_name, ContentDeriver};
use crate::error::{EdudeskError, Result};
use crate::model::{ContentKey, ContentKind, ContentRecord};
use crate::session::{ContentStatus, EditorSession, PendingNavigation};
use crate::store::ContentStore;
use chrono::Utc;

/// Handle for one in-flight content fetch. Single-use: consumed by
/// [`EditorController::complete_fetch`].
#[derive(Debug)]
pub struct FetchTicket {
    key: ContentKey,
    seq: u64,
}

impl FetchTicket {
    pub fn key(&self) -> ContentKey {
        self.key
    }
}

pub struct EditorController<S: ContentStore, D: ContentDeriver> {
    store: S,
    deriver: D,
    catalog: TopicCatalog,
    session: EditorSession,
    /// Load generation; bumped on every (re)load so late fetch results
    /// for a superseded view are rejected.
    fetch_seq: u64,
}

impl<S: ContentStore, D: ContentDeriver> EditorController<S, D> {
    /// Opens a session on the catalog's first subtopic (when it has one)
    /// with the given initial kind.
    pub fn new(store: S, deriver: D, catalog: TopicCatalog, initial_kind: ContentKind) -> Result<Self> {
        let mut controller = Self {
            store,
            deriver,
            session: EditorSession::new(initial_kind),
            fetch_seq: 0,
            catalog,
        };
        controller.session.selected_subtopic = controller.catalog.first_subtopic();
        controller.load_current()?;
        Ok(controller)
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- navigation ---

    pub fn select_subtopic(&mut self, subtopic_id: u32) -> Result<()> {
        if self.session.confirming || self.session.selected_subtopic == Some(subtopic_id) {
            return Ok(());
        }
        if self.session.is_dirty {
            self.session.pending = Some(PendingNavigation::Subtopic(subtopic_id));
            self.session.confirming = true;
            return Ok(());
        }
        self.session.selected_subtopic = Some(subtopic_id);
        self.exit_edit();
        self.load_current()
    }

    pub fn select_kind(&mut self, kind: ContentKind) -> Result<()> {
        if self.session.confirming || kind == self.session.active_kind {
            return Ok(());
        }
        if self.session.is_dirty {
            self.session.pending = Some(PendingNavigation::Kind(kind));
            self.session.confirming = true;
            return Ok(());
        }
        self.session.active_kind = kind;
        self.exit_edit();
        self.load_current()
    }

    // --- editing ---

    pub fn toggle_edit(&mut self) -> Result<()> {
        if self.session.confirming {
            return Ok(());
        }
        if !self.session.is_editing {
            self.session.draft = self.stored_content().to_string();
            self.session.is_editing = true;
            self.session.is_dirty = false;
        } else if !self.session.is_dirty {
            self.session.is_editing = false;
        } else {
            // Exit-edit with unsaved changes: confirm, but with no
            // navigation target.
            self.session.pending = None;
            self.session.confirming = true;
        }
        Ok(())
    }

    pub fn edit_draft(&mut self, text: &str) -> Result<()> {
        if !self.session.is_editing || self.session.confirming {
            return Ok(());
        }
        self.session.is_dirty = text != self.stored_content();
        self.session.draft = text.to_string();
        Ok(())
    }

    pub fn save(&mut self) -> Result<()> {
        if let Some(key) = self.session.current_key() {
            let mut record = match self.session.record.clone() {
                Some(record) => record,
                None => ContentRecord::new(key),
            };
            record.content = self.session.draft.clone();
            record.updated_at = Utc::now();
            let saved = self.store.upsert(&record)?;
            self.apply_loaded(saved);
        }
        self.exit_edit();
        self.flush_pending()
    }

    pub fn cancel_edit(&mut self) -> Result<()> {
        self.session.draft = self.stored_content().to_string();
        self.exit_edit();
        self.flush_pending()
    }

    // --- confirmation ---

    pub fn confirm_discard(&mut self) -> Result<()> {
        if !self.session.confirming {
            return Err(EdudeskError::Api(
                "No confirmation is outstanding".to_string(),
            ));
        }
        self.session.draft = self.stored_content().to_string();
        self.exit_edit();
        self.flush_pending()
    }

    pub fn continue_editing(&mut self) -> Result<()> {
        self.session.confirming = false;
        self.session.pending = None;
        Ok(())
    }

    // --- upload ---

    pub fn upload(&mut self, source_text: &str, file_stem: &str) -> Result<()> {
        if self.session.confirming {
            return Ok(());
        }
        let subtopic_id = self.session.selected_subtopic.ok_or_else(|| {
            EdudeskError::Api("Cannot upload without a selected subtopic".to_string())
        })?;

        let derived = derive_or_fallback(&self.deriver, source_text);
        let now = Utc::now();
        for kind in ContentKind::ALL {
            let key = ContentKey::new(subtopic_id, kind);
            let mut record = match self.store.get(&key) {
                Ok(record) => record,
                Err(EdudeskError::RecordNotFound(_)) => ContentRecord::new(key),
                Err(e) => return Err(e),
            };
            record.content = derived.for_kind(kind).to_string();
            record.source_file_name = derived_file_name(file_stem, kind);
            record.is_uploaded = true;
            record.updated_at = now;
            self.store.upsert(&record)?;
        }

        self.exit_edit();
        self.load_current()
    }

    pub fn reset_upload(&mut self) -> Result<()> {
        if self.session.confirming {
            return Ok(());
        }
        if self.session.is_dirty {
            self.session.pending = Some(PendingNavigation::ResetUpload);
            self.session.confirming = true;
            return Ok(());
        }
        self.apply_reset()
    }

    // --- asynchronous content fetches ---

    /// Registers a fetch for the current key. The returned ticket is only
    /// honored while the view still shows that key.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        self.session.current_key().map(|key| FetchTicket {
            key,
            seq: self.fetch_seq,
        })
    }

    /// Applies a resolved fetch, or discards it when the view navigated
    /// away, the load generation moved on, or an edit is in progress.
    /// Returns whether the result was applied.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<String>,
    ) -> Result<bool> {
        let stale = self.session.current_key() != Some(ticket.key)
            || ticket.seq != self.fetch_seq
            || self.session.is_dirty;
        if stale {
            return Ok(false);
        }
        match outcome {
            Ok(text) => {
                let mut record = match self.session.record.clone() {
                    Some(record) => record,
                    None => ContentRecord::new(ticket.key),
                };
                record.content = text;
                record.updated_at = Utc::now();
                let saved = self.store.upsert(&record)?;
                self.apply_loaded(saved);
            }
            Err(_) => {
                self.session.content_status = ContentStatus::Failed;
            }
        }
        Ok(true)
    }

    // --- internals ---

    fn stored_content(&self) -> &str {
        self.session
            .record
            .as_ref()
            .map(|r| r.content.as_str())
            .unwrap_or("")
    }

    fn exit_edit(&mut self) {
        self.session.is_editing = false;
        self.session.is_dirty = false;
        self.session.confirming = false;
    }

    fn flush_pending(&mut self) -> Result<()> {
        match self.session.pending.take() {
            None => Ok(()),
            Some(PendingNavigation::Kind(kind)) => {
                self.session.active_kind = kind;
                self.load_current()
            }
            Some(PendingNavigation::Subtopic(id)) => {
                self.session.selected_subtopic = Some(id);
                self.load_current()
            }
            Some(PendingNavigation::ResetUpload) => self.apply_reset(),
        }
    }

    /// Flips the current record back to not-uploaded, returning the view
    /// to the upload prompt. Stored content is retained; the next upload
    /// overwrites it.
    fn apply_reset(&mut self) -> Result<()> {
        if let Some(key) = self.session.current_key() {
            let mut record = match self.store.get(&key) {
                Ok(record) => record,
                Err(EdudeskError::RecordNotFound(_)) => ContentRecord::new(key),
                Err(e) => return Err(e),
            };
            record.is_uploaded = false;
            record.updated_at = Utc::now();
            self.store.upsert(&record)?;
        }
        self.load_current()
    }

    /// (Re)loads the record for the current key into the session,
    /// fabricating an empty record when the key is new. Read failures are
    /// absorbed as `ContentStatus::Failed`.
    fn load_current(&mut self) -> Result<()> {
        self.fetch_seq += 1;
        let Some(key) = self.session.current_key() else {
            self.session.record = None;
            self.session.draft = String::new();
            self.session.content_status = ContentStatus::Empty;
            return Ok(());
        };
        match self.store.get(&key) {
            Ok(record) => {
                self.apply_loaded(record);
                Ok(())
            }
            Err(EdudeskError::RecordNotFound(_)) => {
                let record = self.store.upsert(&ContentRecord::new(key))?;
                self.apply_loaded(record);
                Ok(())
            }
            Err(_) => {
                self.session.record = None;
                self.session.draft = String::new();
                self.session.content_status = ContentStatus::Failed;
                Ok(())
            }
        }
    }

    fn apply_loaded(&mut self, record: ContentRecord) {
        self.session.draft = record.content.clone();
        self.session.content_status = if record.is_empty() {
            ContentStatus::Empty
        } else {
            ContentStatus::Loaded
        };
        self.session.record = Some(record);
    }
}
