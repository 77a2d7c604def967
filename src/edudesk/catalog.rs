use crate::error::{EdudeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CATALOG_FILENAME: &str = "topics.json";

/// Leaf node under a topic; the unit content is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: u32,
    pub name: String,
    pub subtopics: Vec<Subtopic>,
}

/// The topic/subtopic hierarchy the sidebar renders. Read-only from the
/// editor's point of view; supplied to the controller at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCatalog {
    pub topics: Vec<Topic>,
}

impl TopicCatalog {
    /// The built-in demo catalog.
    pub fn seed() -> Self {
        let topics = vec![
            Topic {
                id: 1,
                name: "Mathematics".to_string(),
                subtopics: vec![
                    Subtopic {
                        id: 1,
                        name: "Algebra".to_string(),
                    },
                    Subtopic {
                        id: 2,
                        name: "Calculus".to_string(),
                    },
                ],
            },
            Topic {
                id: 2,
                name: "Physics".to_string(),
                subtopics: vec![
                    Subtopic {
                        id: 3,
                        name: "Mechanics".to_string(),
                    },
                    Subtopic {
                        id: 4,
                        name: "Thermodynamics".to_string(),
                    },
                ],
            },
        ];
        Self { topics }
    }

    /// Load a catalog override from the data directory, falling back to
    /// the seed when none is present.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let path = data_dir.as_ref().join(CATALOG_FILENAME);
        if !path.exists() {
            return Ok(Self::seed());
        }
        let content = fs::read_to_string(&path).map_err(EdudeskError::Io)?;
        let catalog: TopicCatalog =
            serde_json::from_str(&content).map_err(EdudeskError::Serialization)?;
        Ok(catalog)
    }

    /// The subtopic a fresh session auto-selects.
    pub fn first_subtopic(&self) -> Option<u32> {
        self.topics
            .iter()
            .flat_map(|t| t.subtopics.iter())
            .map(|s| s.id)
            .next()
    }

    pub fn subtopic_name(&self, subtopic_id: u32) -> Option<&str> {
        self.topics
            .iter()
            .flat_map(|t| t.subtopics.iter())
            .find(|s| s.id == subtopic_id)
            .map(|s| s.name.as_str())
    }

    pub fn topic_of(&self, subtopic_id: u32) -> Option<&Topic> {
        self.topics
            .iter()
            .find(|t| t.subtopics.iter().any(|s| s.id == subtopic_id))
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::seed()
    }
}
