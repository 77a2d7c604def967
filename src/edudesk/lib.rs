//! # Edudesk Architecture
//!
//! Edudesk is a **UI-agnostic administrative library** for an educational
//! content platform, with a CLI client standing in for the dashboard. The
//! library owns the behavior; the CLI only parses arguments and renders.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders markdown/tables, terminal I/O  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per presentation intent          │
//! │  - Returns structured Result types and display messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (controller.rs, session.rs)                           │
//! │  - The unsaved-edit guard state machine                     │
//! │  - Mediates between store, deriver, and the surface         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContentStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Editing Model
//!
//! Each subtopic carries three parallel content slots (book, AI notes,
//! question bank). The controller keeps a draft decoupled from the stored
//! record, and every navigation-class intent runs through one dirty-check
//! gate: with unsaved changes the session enters a `Confirming` state and
//! the request is parked as a `PendingNavigation` until the user saves,
//! cancels, discards, or keeps editing. See [`controller`] for the full
//! transition set.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr, and never exits the
//! process. The same core could serve the web dashboard, a REST API, or
//! any other UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`controller`]: The editor state machine
//! - [`session`]: Session state, phases, pending navigation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`ContentKind`, `ContentKey`, `ContentRecord`)
//! - [`catalog`]: The topic/subtopic hierarchy
//! - [`derive`]: Upload-flow content generation seam
//! - [`users`]: The platform user directory
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not
//!   part of the lib API)

pub mod api;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod derive;
pub mod editor;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod users;
