use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The three parallel content slots attached to every subtopic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Book,
    AiNotes,
    QuestionBank,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Book,
        ContentKind::AiNotes,
        ContentKind::QuestionBank,
    ];

    /// Stable identifier used in file names, serialized keys, and the CLI.
    pub fn slug(&self) -> &'static str {
        match self {
            ContentKind::Book => "book",
            ContentKind::AiNotes => "ai-notes",
            ContentKind::QuestionBank => "question-bank",
        }
    }

    /// Human-facing tab label.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Book => "Book",
            ContentKind::AiNotes => "AI Notes",
            ContentKind::QuestionBank => "Question Bank",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "book" => Ok(ContentKind::Book),
            "ai-notes" | "notes" => Ok(ContentKind::AiNotes),
            "question-bank" | "questions" => Ok(ContentKind::QuestionBank),
            other => Err(format!(
                "Unknown content kind '{}' (expected book, ai-notes, or question-bank)",
                other
            )),
        }
    }
}

/// Composite key for content records. The store is always addressed by
/// this pair, never by record id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentKey {
    pub subtopic_id: u32,
    pub kind: ContentKind,
}

impl ContentKey {
    pub fn new(subtopic_id: u32, kind: ContentKind) -> Self {
        Self { subtopic_id, kind }
    }

    /// Flat form used as a JSON map key and in content file names.
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.subtopic_id, self.kind.slug())
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.subtopic_id, self.kind)
    }
}

/// One content record per (subtopic, kind) pair.
///
/// Records are created lazily on first read of a missing key, overwritten
/// on every save or upload, and never deleted in normal operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: Uuid,
    pub key: ContentKey,
    /// Markdown body, opaque to the controller.
    pub content: String,
    /// Display-only provenance; never parsed.
    pub source_file_name: String,
    /// True once a file has ever been supplied for this key. Governs
    /// whether the upload prompt or the editor surface is shown.
    pub is_uploaded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord {
    /// An empty, not-yet-uploaded placeholder record for a key.
    pub fn new(key: ContentKey) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            key,
            content: String::new(),
            source_file_name: String::new(),
            is_uploaded: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
