//! External editor integration for the `edit` command: round-trips a
//! draft through the user's `$EDITOR` via a temp file.

use crate::error::{EdudeskError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(EdudeskError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| EdudeskError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(EdudeskError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(EdudeskError::Io)
}

/// Opens an editor seeded with the draft and returns the edited text.
pub fn edit_draft_text(initial: &str, file_extension: &str) -> Result<String> {
    let temp_dir = env::temp_dir();
    let temp_file = temp_dir.join(format!("edudesk_edit{}", file_extension));

    fs::write(&temp_file, initial).map_err(EdudeskError::Io)?;

    let result = open_in_editor(&temp_file);

    let _ = fs::remove_file(&temp_file);

    result
}
