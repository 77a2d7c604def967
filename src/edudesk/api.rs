//! # API Facade
//!
//! The single entry point for every console operation, regardless of the
//! UI driving it. One method per presentation intent: the editor intents
//! map 1:1 onto controller transitions, plus the user-directory surface
//! and a topics overview for the sidebar.
//!
//! The facade dispatches and shapes results; it holds no business logic
//! and does no I/O of its own. It never writes to stdout/stderr — clients
//! render the returned structures and [`CmdMessage`]s themselves.
//!
//! Generic over [`ContentStore`] and [`ContentDeriver`]:
//! production pairs `FileStore` with `TemplateDeriver`; tests pair
//! `InMemoryStore` with whatever deriver the case needs.

use crate::catalog::{Topic, TopicCatalog};
use crate::controller::{EditorController, FetchTicket};
use crate::derive::ContentDeriver;
use crate::error::Result;
use crate::model::{ContentKind, ContentRecord};
use crate::session::EditorSession;
use crate::store::ContentStore;
use crate::users::{User, UserDirectory};

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One sidebar row: a topic with the upload state of each subtopic.
#[derive(Debug, Clone)]
pub struct TopicOverview {
    pub topic: Topic,
    /// (subtopic id, record metadata stored for it; bodies not loaded)
    pub subtopics: Vec<(u32, Vec<ContentRecord>)>,
}

pub struct EdudeskApi<S: ContentStore, D: ContentDeriver> {
    controller: EditorController<S, D>,
    users: UserDirectory,
}

impl<S: ContentStore, D: ContentDeriver> EdudeskApi<S, D> {
    pub fn new(store: S, deriver: D, catalog: TopicCatalog, initial_kind: ContentKind) -> Result<Self> {
        Ok(Self {
            controller: EditorController::new(store, deriver, catalog, initial_kind)?,
            users: UserDirectory::seed(),
        })
    }

    pub fn session(&self) -> &EditorSession {
        self.controller.session()
    }

    pub fn catalog(&self) -> &TopicCatalog {
        self.controller.catalog()
    }

    // --- editor intents (1:1 with controller transitions) ---

    pub fn select_subtopic(&mut self, subtopic_id: u32) -> Result<&EditorSession> {
        self.controller.select_subtopic(subtopic_id)?;
        Ok(self.controller.session())
    }

    pub fn select_kind(&mut self, kind: ContentKind) -> Result<&EditorSession> {
        self.controller.select_kind(kind)?;
        Ok(self.controller.session())
    }

    pub fn toggle_edit(&mut self) -> Result<&EditorSession> {
        self.controller.toggle_edit()?;
        Ok(self.controller.session())
    }

    pub fn edit_draft(&mut self, text: &str) -> Result<&EditorSession> {
        self.controller.edit_draft(text)?;
        Ok(self.controller.session())
    }

    pub fn save(&mut self) -> Result<Vec<CmdMessage>> {
        self.controller.save()?;
        Ok(vec![CmdMessage::success("Content saved")])
    }

    pub fn cancel_edit(&mut self) -> Result<Vec<CmdMessage>> {
        self.controller.cancel_edit()?;
        Ok(vec![CmdMessage::info("Edit cancelled, draft discarded")])
    }

    pub fn confirm_discard(&mut self) -> Result<Vec<CmdMessage>> {
        self.controller.confirm_discard()?;
        Ok(vec![CmdMessage::warning("Unsaved changes discarded")])
    }

    pub fn continue_editing(&mut self) -> Result<&EditorSession> {
        self.controller.continue_editing()?;
        Ok(self.controller.session())
    }

    pub fn upload(&mut self, source_text: &str, file_stem: &str) -> Result<Vec<CmdMessage>> {
        self.controller.upload(source_text, file_stem)?;
        let subtopic = self
            .controller
            .session()
            .selected_subtopic
            .map(|id| {
                self.catalog()
                    .subtopic_name(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("subtopic {}", id))
            })
            .unwrap_or_default();
        Ok(vec![CmdMessage::success(format!(
            "Uploaded '{}': generated book, AI notes, and question bank for {}",
            file_stem, subtopic
        ))])
    }

    pub fn reset_upload(&mut self) -> Result<Vec<CmdMessage>> {
        self.controller.reset_upload()?;
        if self.controller.session().confirming {
            Ok(vec![CmdMessage::warning(
                "Unsaved changes; confirm before resetting the upload",
            )])
        } else {
            Ok(vec![CmdMessage::info("Returned to the upload prompt")])
        }
    }

    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        self.controller.begin_fetch()
    }

    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: Result<String>) -> Result<bool> {
        self.controller.complete_fetch(ticket, outcome)
    }

    // --- overview & users ---

    /// Sidebar data: every topic with the stored records per subtopic.
    pub fn topics_overview(&self) -> Result<Vec<TopicOverview>> {
        let mut overviews = Vec::new();
        for topic in &self.catalog().topics {
            let mut subtopics = Vec::new();
            for subtopic in &topic.subtopics {
                subtopics.push((subtopic.id, self.controller.store().list(subtopic.id)?));
            }
            overviews.push(TopicOverview {
                topic: topic.clone(),
                subtopics,
            });
        }
        Ok(overviews)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.all().to_vec()
    }

    pub fn search_users(&self, term: &str) -> Vec<User> {
        self.users.search(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::TemplateDeriver;
    use crate::store::memory::InMemoryStore;

    fn api() -> EdudeskApi<InMemoryStore, TemplateDeriver> {
        EdudeskApi::new(
            InMemoryStore::new(),
            TemplateDeriver,
            TopicCatalog::seed(),
            ContentKind::Book,
        )
        .unwrap()
    }

    #[test]
    fn upload_reports_the_subtopic_by_name() {
        let mut api = api();
        let messages = api.upload("src", "chapter1").unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("Algebra"));
        assert!(matches!(messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn topics_overview_covers_every_subtopic() {
        let mut api = api();
        api.upload("src", "chapter1").unwrap();

        let overviews = api.topics_overview().unwrap();
        assert_eq!(overviews.len(), 2);
        let algebra = &overviews[0].subtopics[0];
        assert_eq!(algebra.0, 1);
        assert_eq!(algebra.1.len(), 3);
        // Calculus was never visited, so nothing is stored for it.
        let calculus = &overviews[0].subtopics[1];
        assert!(calculus.1.is_empty());
    }

    #[test]
    fn user_intents_delegate_to_the_directory() {
        let api = api();
        assert_eq!(api.list_users().len(), 5);
        assert_eq!(api.search_users("emily").len(), 1);
    }

    #[test]
    fn reset_upload_with_dirty_draft_warns_instead_of_resetting() {
        let mut api = api();
        api.upload("src", "chapter1").unwrap();
        api.toggle_edit().unwrap();
        api.edit_draft("scratch").unwrap();

        let messages = api.reset_upload().unwrap();
        assert!(matches!(messages[0].level, MessageLevel::Warning));
        assert!(api.session().confirming);
    }
}
