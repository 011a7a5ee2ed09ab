//! # Edit Session
//!
//! One editing surface's view of a document: the store plus the in-flight
//! move gesture.
//!
//! Drag-and-drop is a two-phase protocol: `begin_move(id)` opens a gesture,
//! `commit_move(destination)` resolves the section's *current* index and
//! invokes the reorder engine, `cancel_move()` abandons it. Intermediate
//! hover states never touch stored state — only a commit mutates the store.

use crate::document::ResumeDocument;
use crate::errors::EditorError;
use crate::store::DocumentStore;
use std::sync::Arc;
use vitae_document::{Section, SectionId, SectionRegistry};

pub struct EditSession {
    store: DocumentStore,

    /// Section picked up by `begin_move`, if a gesture is open.
    active_move: Option<SectionId>,
}

impl EditSession {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            active_move: None,
        }
    }

    /// Session opened on the sample seed document.
    pub fn seeded(registry: Arc<SectionRegistry>) -> Result<Self, EditorError> {
        Ok(Self::new(DocumentStore::seeded(registry)?))
    }

    /// Session opened on specific sections (e.g. a loaded snapshot).
    pub fn with_sections(
        registry: Arc<SectionRegistry>,
        sections: Vec<Section>,
    ) -> Result<Self, EditorError> {
        Ok(Self::new(DocumentStore::new(registry, sections)?))
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }

    pub fn document(&self) -> &ResumeDocument {
        self.store.document()
    }

    /// Open a move gesture on a section. Replaces any prior gesture.
    pub fn begin_move(&mut self, id: &SectionId) -> Result<(), EditorError> {
        if self.store.document().index_of(id).is_none() {
            return Err(EditorError::Stale { id: id.clone() });
        }
        self.active_move = Some(id.clone());
        Ok(())
    }

    /// Commit the open gesture, moving its section to `destination`.
    ///
    /// The source index is resolved at commit time, so edits made while the
    /// gesture was open (including removal of the dragged section) are
    /// handled against current state. The gesture is consumed either way.
    pub fn commit_move(&mut self, destination: usize) -> Result<(), EditorError> {
        let id = self.active_move.take().ok_or(EditorError::NoActiveMove)?;

        let from = self
            .store
            .document()
            .index_of(&id)
            .ok_or(EditorError::Stale { id })?;

        self.store.reorder(from, destination)
    }

    /// Abandon the open gesture, if any.
    pub fn cancel_move(&mut self) {
        self.active_move = None;
    }

    pub fn move_in_progress(&self) -> bool {
        self.active_move.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        EditSession::seeded(Arc::new(SectionRegistry::standard())).unwrap()
    }

    #[test]
    fn test_commit_without_begin_fails() {
        let mut session = session();
        assert_eq!(session.commit_move(0).unwrap_err(), EditorError::NoActiveMove);
    }

    #[test]
    fn test_begin_commit_moves_section() {
        let mut session = session();
        let id = session.document().sections()[0].id.clone();

        session.begin_move(&id).unwrap();
        assert!(session.move_in_progress());

        session.commit_move(2).unwrap();
        assert!(!session.move_in_progress());
        assert_eq!(session.document().index_of(&id), Some(2));
    }

    #[test]
    fn test_cancel_leaves_document_untouched() {
        let mut session = session();
        let id = session.document().sections()[0].id.clone();
        let before = session.store().snapshot();

        session.begin_move(&id).unwrap();
        session.cancel_move();

        assert!(!session.move_in_progress());
        assert_eq!(session.store().snapshot(), before);
        assert_eq!(session.commit_move(1).unwrap_err(), EditorError::NoActiveMove);
    }

    #[test]
    fn test_begin_move_on_unknown_id_is_stale() {
        let mut session = session();
        let ghost = SectionId::generate();

        let err = session.begin_move(&ghost).unwrap_err();
        assert_eq!(err, EditorError::Stale { id: ghost });
    }

    #[test]
    fn test_commit_after_target_removed_is_stale() {
        let mut session = session();
        let id = session.document().sections()[1].id.clone();

        session.begin_move(&id).unwrap();
        session.store_mut().remove_section(&id);

        let err = session.commit_move(0).unwrap_err();
        assert_eq!(err, EditorError::Stale { id });
        assert!(!session.move_in_progress());
    }
}
