//! # Vitae Editor
//!
//! Core document editing engine: the store every mutation passes through,
//! the reorder engine, and the edit-session move gesture.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: typed sections + schema registry  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: store + reorder + session           │
//! │  - DocumentStore: atomic, validated ops     │
//! │  - reorder: pure single-element move        │
//! │  - EditSession: two-phase move gesture      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: document → preview fragments     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Every mutation goes through the store**: manual edits, reorders and
//!    assistant-applied patches share one code path
//! 2. **Atomic commits**: replacement state is fully computed before it is
//!    installed; observers never see a half-applied document
//! 3. **Snapshots are immutable**: the store hands out owned copies, never
//!    references into live state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitae_editor::{DocumentStore, EditSession};
//! use vitae_document::{ContentPatch, SectionRegistry};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(SectionRegistry::standard());
//! let mut session = EditSession::seeded(registry)?;
//!
//! // Drag gesture: begin → (hover states stay out of the store) → commit
//! let id = session.store().document().sections()[0].id.clone();
//! session.begin_move(&id)?;
//! session.commit_move(2)?;
//! ```

mod document;
mod errors;
mod reorder;
mod session;
mod store;

pub use document::ResumeDocument;
pub use errors::EditorError;
pub use reorder::{move_item, MoveError};
pub use session::EditSession;
pub use store::DocumentStore;
