use clap::{Parser, Subcommand};
use edudesk::model::ContentKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edudesk")]
#[command(about = "Administrative console for an educational content platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $EDUDESK_HOME or the platform data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List topics and the upload state of each subtopic
    #[command(alias = "t")]
    Topics,

    /// Show a subtopic's content (book, ai-notes, or question-bank)
    #[command(alias = "s")]
    Show {
        /// Subtopic id (see `topics`)
        subtopic: u32,

        /// Content kind to show (defaults to the configured tab)
        #[arg(short, long)]
        kind: Option<ContentKind>,

        /// Print the raw markdown instead of rendering it
        #[arg(long)]
        raw: bool,
    },

    /// Upload a chapter source and generate all three content views
    #[command(alias = "up")]
    Upload {
        /// Subtopic id the chapter belongs to
        subtopic: u32,

        /// Path to the chapter source file
        file: PathBuf,
    },

    /// Edit a subtopic's content in the editor
    #[command(alias = "e")]
    Edit {
        /// Subtopic id
        subtopic: u32,

        /// Content kind to edit (defaults to the configured tab)
        #[arg(short, long)]
        kind: Option<ContentKind>,

        /// Replacement content (skips the editor; requires --no-editor)
        #[arg(long)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Return a subtopic's view to the upload prompt
    Reset {
        /// Subtopic id
        subtopic: u32,

        /// Content kind to reset (defaults to the configured tab)
        #[arg(short, long)]
        kind: Option<ContentKind>,
    },

    /// List platform users, optionally filtered
    #[command(alias = "u")]
    Users {
        /// Search term (matches name, email, or role)
        term: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (content-ext, default-kind)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
