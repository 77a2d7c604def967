use crate::model::{ContentKey, ContentKind, ContentRecord};

/// Body the presentation shows for a loaded-but-empty record.
pub const EMPTY_PLACEHOLDER: &str =
    "# No content available\n\nThis section has no content yet.";

/// Body shown when a record read failed outright. Distinct from
/// [`EMPTY_PLACEHOLDER`] so the surface can message the two cases
/// differently.
pub const LOAD_FAILED_BODY: &str =
    "# Error loading content\n\nThere was an error loading this content. Please try again later.";

/// A navigation-class request deferred while unsaved changes are pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingNavigation {
    Kind(ContentKind),
    Subtopic(u32),
    ResetUpload,
}

/// How the last load of the current key went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentStatus {
    #[default]
    Empty,
    Loaded,
    Failed,
}

/// The observable state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Viewing,
    EditingClean,
    EditingDirty,
    Confirming,
}

/// One active editor view. Plain data; all transitions live in the
/// controller.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub selected_subtopic: Option<u32>,
    pub active_kind: ContentKind,
    /// Editable buffer, decoupled from the stored record until saved.
    pub draft: String,
    pub is_editing: bool,
    /// Draft differs from the last-loaded stored content.
    pub is_dirty: bool,
    /// Set only while a confirmation prompt is outstanding. May be empty
    /// there: the exit-edit confirmation has no navigation target.
    pub pending: Option<PendingNavigation>,
    pub confirming: bool,
    pub content_status: ContentStatus,
    /// Last-loaded stored record for the current key, if any.
    pub record: Option<ContentRecord>,
}

impl EditorSession {
    pub fn new(active_kind: ContentKind) -> Self {
        Self {
            selected_subtopic: None,
            active_kind,
            draft: String::new(),
            is_editing: false,
            is_dirty: false,
            pending: None,
            confirming: false,
            content_status: ContentStatus::Empty,
            record: None,
        }
    }

    pub fn current_key(&self) -> Option<ContentKey> {
        self.selected_subtopic
            .map(|id| ContentKey::new(id, self.active_kind))
    }

    pub fn phase(&self) -> EditorPhase {
        if self.confirming {
            EditorPhase::Confirming
        } else if self.is_editing {
            if self.is_dirty {
                EditorPhase::EditingDirty
            } else {
                EditorPhase::EditingClean
            }
        } else {
            EditorPhase::Viewing
        }
    }

    /// True when the current key has uploaded content; drives the
    /// editor-vs-upload-prompt split.
    pub fn has_uploaded_content(&self) -> bool {
        self.record
            .as_ref()
            .map(|r| r.is_uploaded && !r.is_empty())
            .unwrap_or(false)
    }

    /// What the preview should render: the draft when present, otherwise
    /// the status-appropriate placeholder.
    pub fn display_body(&self) -> &str {
        match self.content_status {
            ContentStatus::Failed => LOAD_FAILED_BODY,
            ContentStatus::Empty if self.draft.trim().is_empty() => EMPTY_PLACEHOLDER,
            _ => &self.draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentKey;

    #[test]
    fn fresh_session_is_viewing_and_empty() {
        let session = EditorSession::new(ContentKind::Book);
        assert_eq!(session.phase(), EditorPhase::Viewing);
        assert_eq!(session.content_status, ContentStatus::Empty);
        assert_eq!(session.display_body(), EMPTY_PLACEHOLDER);
        assert!(session.current_key().is_none());
    }

    #[test]
    fn phase_tracks_flags() {
        let mut session = EditorSession::new(ContentKind::Book);
        session.is_editing = true;
        assert_eq!(session.phase(), EditorPhase::EditingClean);
        session.is_dirty = true;
        assert_eq!(session.phase(), EditorPhase::EditingDirty);
        session.confirming = true;
        assert_eq!(session.phase(), EditorPhase::Confirming);
    }

    #[test]
    fn failed_status_masks_the_draft() {
        let mut session = EditorSession::new(ContentKind::Book);
        session.draft = "stale".to_string();
        session.content_status = ContentStatus::Failed;
        assert_eq!(session.display_body(), LOAD_FAILED_BODY);
    }

    #[test]
    fn current_key_follows_selection() {
        let mut session = EditorSession::new(ContentKind::AiNotes);
        session.selected_subtopic = Some(3);
        assert_eq!(
            session.current_key(),
            Some(ContentKey::new(3, ContentKind::AiNotes))
        );
    }
}
