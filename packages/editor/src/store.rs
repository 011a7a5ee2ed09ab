//! # Document Store
//!
//! Owns the document; all content and ordering mutations pass through it.
//!
//! Every operation is atomic: the replacement value is fully computed (and
//! validated by the registry schema) before anything is installed, so a
//! rejected mutation leaves the document byte-for-byte unchanged and an
//! observer never sees a half-applied state.

use crate::document::ResumeDocument;
use crate::errors::EditorError;
use crate::reorder::{self, MoveError};
use std::sync::Arc;
use vitae_document::{seed_sections, ContentPatch, Section, SectionId, SectionKind, SectionRegistry};

pub struct DocumentStore {
    registry: Arc<SectionRegistry>,
    document: ResumeDocument,
}

impl DocumentStore {
    pub fn new(
        registry: Arc<SectionRegistry>,
        sections: Vec<Section>,
    ) -> Result<Self, EditorError> {
        Ok(Self {
            registry,
            document: ResumeDocument::from_sections(sections)?,
        })
    }

    /// Store opened on the sample seed document.
    pub fn seeded(registry: Arc<SectionRegistry>) -> Result<Self, EditorError> {
        Self::new(registry, seed_sections())
    }

    /// Store opened on a previously persisted snapshot.
    pub fn from_snapshot(
        registry: Arc<SectionRegistry>,
        snapshot: ResumeDocument,
    ) -> Result<Self, EditorError> {
        // Re-validate: snapshots cross a trust boundary.
        for section in snapshot.sections() {
            let schema = registry.schema_for(section.kind)?;
            schema.validate(&section.content)?;
        }
        Ok(Self {
            registry,
            document: snapshot,
        })
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Immutable snapshot of the committed state.
    pub fn snapshot(&self) -> ResumeDocument {
        self.document.clone()
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Append a new section with the kind's default title and content.
    pub fn create_section(&mut self, kind: SectionKind) -> Result<SectionId, EditorError> {
        let schema = self.registry.schema_for(kind)?;
        let section = Section::new(kind, schema.default_title(), schema.default_content());
        let id = section.id.clone();

        self.document.push_section(section);
        tracing::debug!(section = %id, %kind, "created section");
        Ok(id)
    }

    /// Patch one section's content through its registry schema.
    pub fn update_section_content(
        &mut self,
        id: &SectionId,
        patch: &ContentPatch,
    ) -> Result<(), EditorError> {
        let index = self
            .document
            .index_of(id)
            .ok_or_else(|| EditorError::Stale { id: id.clone() })?;

        let section = &self.document.sections()[index];
        let schema = self.registry.schema_for(section.kind)?;
        let patched = schema.apply(&section.content, patch)?;

        self.document.replace_content(index, patched);
        tracing::debug!(section = %id, "updated section content");
        Ok(())
    }

    /// Move the section at `from` to `to`; no-op when they are equal.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        let reordered =
            reorder::move_item(self.document.sections(), from, to).map_err(|e| match e {
                MoveError::OutOfRange { index, len } => EditorError::Range { index, len },
            })?;

        if from == to {
            return Ok(());
        }

        self.document.replace_order(reordered);
        tracing::debug!(from, to, "reordered sections");
        Ok(())
    }

    /// Remove a section. Removal is idempotent: an absent id is a no-op.
    pub fn remove_section(&mut self, id: &SectionId) {
        if let Some(index) = self.document.index_of(id) {
            self.document.remove_at(index);
            tracing::debug!(section = %id, "removed section");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_document::PatchError;

    fn store() -> DocumentStore {
        DocumentStore::seeded(Arc::new(SectionRegistry::standard())).unwrap()
    }

    #[test]
    fn test_create_section_appends_with_defaults() {
        let mut store = store();
        let before = store.document().len();

        let id = store.create_section(SectionKind::Skills).unwrap();

        let doc = store.document();
        assert_eq!(doc.len(), before + 1);
        let created = doc.sections().last().unwrap();
        assert_eq!(created.id, id);
        assert_eq!(created.title, "Skills");
        assert_eq!(created.content.kind(), SectionKind::Skills);
    }

    #[test]
    fn test_create_section_fails_on_unregistered_kind() {
        let registry = Arc::new(SectionRegistry::empty());
        let mut store = DocumentStore::new(registry, vec![]).unwrap();

        let err = store.create_section(SectionKind::Personal).unwrap_err();
        assert!(matches!(err, EditorError::Configuration(_)));
    }

    #[test]
    fn test_rejected_patch_leaves_document_unchanged() {
        let mut store = store();
        let skills_id = store.document().sections()[3].id.clone();
        let before = store.snapshot();

        let err = store
            .update_section_content(
                &skills_id,
                &ContentPatch::AddSkill {
                    skill: "React".to_string(), // already in the seed set
                },
            )
            .unwrap_err();

        assert_eq!(
            err,
            EditorError::Validation(PatchError::DuplicateSkill("React".to_string()))
        );
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_touches_only_the_target_section() {
        let mut store = store();
        let skills_id = store.document().sections()[3].id.clone();
        let before = store.snapshot();

        store
            .update_section_content(
                &skills_id,
                &ContentPatch::AddSkill {
                    skill: "Rust".to_string(),
                },
            )
            .unwrap();

        let after = store.snapshot();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.sections().iter().zip(after.sections()) {
            if old.id == skills_id {
                assert_ne!(old.content, new.content);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_unknown_id_is_stale() {
        let mut store = store();
        let ghost = SectionId::generate();

        let err = store
            .update_section_content(
                &ghost,
                &ContentPatch::AddSkill {
                    skill: "Rust".to_string(),
                },
            )
            .unwrap_err();

        assert_eq!(err, EditorError::Stale { id: ghost });
    }

    #[test]
    fn test_reorder_same_index_keeps_version() {
        let mut store = store();
        let before = store.snapshot();

        store.reorder(2, 2).unwrap();

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.document().version(), before.version());
    }

    #[test]
    fn test_reorder_out_of_range() {
        let mut store = store();
        let len = store.document().len();

        let err = store.reorder(0, len).unwrap_err();
        assert_eq!(err, EditorError::Range { index: len, len });
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = store();
        let id = store.document().sections()[1].id.clone();

        store.remove_section(&id);
        let after_first = store.snapshot();

        store.remove_section(&id);
        assert_eq!(store.snapshot(), after_first);
    }

    #[test]
    fn test_snapshot_is_detached_from_live_state() {
        let mut store = store();
        let snapshot = store.snapshot();

        store.create_section(SectionKind::Projects).unwrap();

        assert_eq!(snapshot.len(), 6);
        assert_eq!(store.document().len(), 7);
    }
}
