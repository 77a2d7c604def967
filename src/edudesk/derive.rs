//! Content derivation for the upload flow.
//!
//! Uploading one chapter source produces three bodies, one per
//! [`ContentKind`]. The real platform hands the source to a generation
//! pipeline; this console ships a template-backed stand-in behind the same
//! seam. Derivation failures are absorbed into a fixed fallback body and
//! never reach the presentation layer as errors.

use crate::error::Result;
use crate::model::ContentKind;

/// Body shown when the derivation collaborator fails.
pub const FALLBACK_BODY: &str = "# Fallback Content\n\nThe requested content could not be generated.\n\nPlease try uploading again later.";

/// The three generated bodies for one uploaded source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedContent {
    pub book: String,
    pub ai_notes: String,
    pub question_bank: String,
}

impl DerivedContent {
    pub fn for_kind(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Book => &self.book,
            ContentKind::AiNotes => &self.ai_notes,
            ContentKind::QuestionBank => &self.question_bank,
        }
    }

    /// The same body in all three slots.
    pub fn uniform(body: &str) -> Self {
        Self {
            book: body.to_string(),
            ai_notes: body.to_string(),
            question_bank: body.to_string(),
        }
    }
}

/// Seam for the generation pipeline: opaque source text in, one body per
/// kind out.
pub trait ContentDeriver {
    fn derive(&self, source_text: &str) -> Result<DerivedContent>;
}

/// Runs the deriver and substitutes [`FALLBACK_BODY`] in every slot when
/// it fails. This is the only way the controller invokes derivation.
pub fn derive_or_fallback<D: ContentDeriver>(deriver: &D, source_text: &str) -> DerivedContent {
    deriver
        .derive(source_text)
        .unwrap_or_else(|_| DerivedContent::uniform(FALLBACK_BODY))
}

/// Provenance name for a derived body, e.g. `chapter1_ai_notes.md`.
pub fn derived_file_name(stem: &str, kind: ContentKind) -> String {
    let suffix = match kind {
        ContentKind::Book => "book",
        ContentKind::AiNotes => "ai_notes",
        ContentKind::QuestionBank => "questions",
    };
    format!("{}_{}.md", stem, suffix)
}

/// Stand-in deriver emitting fixed demo templates regardless of source.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateDeriver;

const BOOK_TEMPLATE: &str = r#"# Chapter Overview

This is the book content for this chapter. It contains detailed explanations of concepts and formulas.

## Key Concepts

- First principle
- Second principle
- Third principle

### Formulas

$$E = mc^2$$

### Examples

Here are some examples to illustrate the concepts discussed in this chapter..."#;

const AI_NOTES_TEMPLATE: &str = r#"# AI Generated Notes

These notes highlight the most important concepts from the chapter.

## Main Takeaways

1. First important point with simplified explanation
2. Second important point with practical applications
3. Third important point with diagrams and illustrations

### Quick Reference

| Concept | Definition | Application |
| ------- | ---------- | ----------- |
| Term 1 | Definition 1 | Where to use |
| Term 2 | Definition 2 | Where to use |"#;

const QUESTION_BANK_TEMPLATE: &str = r#"# Practice Questions

## Multiple Choice

1. What is the correct formula for calculating X?
   - a) X = Y²
   - b) X = Y + Z
   - c) X = Y × Z
   - d) X = Y ÷ Z

2. Which of the following is true about concept Z?

## Problems

1. Calculate the value of X when Y = 5 and Z = 3.

2. Explain the relationship between X and Y in your own words."#;

impl ContentDeriver for TemplateDeriver {
    fn derive(&self, _source_text: &str) -> Result<DerivedContent> {
        Ok(DerivedContent {
            book: BOOK_TEMPLATE.to_string(),
            ai_notes: AI_NOTES_TEMPLATE.to_string(),
            question_bank: QUESTION_BANK_TEMPLATE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdudeskError;

    struct FailingDeriver;

    impl ContentDeriver for FailingDeriver {
        fn derive(&self, _source_text: &str) -> Result<DerivedContent> {
            Err(EdudeskError::Derive("pipeline unavailable".to_string()))
        }
    }

    #[test]
    fn template_deriver_fills_all_three_slots() {
        let derived = TemplateDeriver.derive("anything").unwrap();
        assert!(derived.book.starts_with("# Chapter Overview"));
        assert!(derived.ai_notes.starts_with("# AI Generated Notes"));
        assert!(derived.question_bank.starts_with("# Practice Questions"));
    }

    #[test]
    fn failure_is_absorbed_into_the_fallback_body() {
        let derived = derive_or_fallback(&FailingDeriver, "src");
        for kind in ContentKind::ALL {
            assert_eq!(derived.for_kind(kind), FALLBACK_BODY);
        }
    }

    #[test]
    fn derived_file_names_follow_the_upload_convention() {
        assert_eq!(derived_file_name("chapter1", ContentKind::Book), "chapter1_book.md");
        assert_eq!(
            derived_file_name("chapter1", ContentKind::AiNotes),
            "chapter1_ai_notes.md"
        );
        assert_eq!(
            derived_file_name("chapter1", ContentKind::QuestionBank),
            "chapter1_questions.md"
        );
    }
}
