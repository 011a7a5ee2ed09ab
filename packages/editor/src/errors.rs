//! Error types for the editor.

use thiserror::Error;
use vitae_document::{PatchError, RegistryError, SectionId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Content violates its kind's schema; the document is unchanged.
    #[error("validation error: {0}")]
    Validation(#[from] PatchError),

    /// Reorder index outside `[0, len)`.
    #[error("index {index} out of range for document of length {len}")]
    Range { index: usize, len: usize },

    /// Unregistered section kind. A wiring defect, not a runtime condition.
    #[error("configuration error: {0}")]
    Configuration(#[from] RegistryError),

    /// The target section no longer exists (removed or replaced since the
    /// edit was computed).
    #[error("stale edit: section '{id}' no longer exists")]
    Stale { id: SectionId },

    /// `commit_move` without a preceding `begin_move`.
    #[error("no move gesture in progress")]
    NoActiveMove,

    /// Two sections share an id in a loaded snapshot.
    #[error("duplicate section id '{id}' in document")]
    DuplicateSection { id: SectionId },
}
