//! # Résumé Document
//!
//! The ordered sequence of sections being edited.
//!
//! Invariants:
//! - all section ids are unique
//! - sequence order is total and defines both preview and export order
//! - every section's content satisfies its kind's schema (mutations are
//!   validated upstream, in the store)
//!
//! A `ResumeDocument` is a value. The store hands out clones as snapshots;
//! nothing outside the store can mutate live state.

use crate::errors::EditorError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vitae_document::{Section, SectionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    sections: Vec<Section>,

    /// Increments on each committed mutation.
    version: u64,
}

impl ResumeDocument {
    /// Build a document from sections, rejecting duplicate ids.
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, EditorError> {
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.clone()) {
                return Err(EditorError::DuplicateSection {
                    id: section.id.clone(),
                });
            }
        }

        Ok(Self {
            sections,
            version: 0,
        })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn index_of(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|s| &s.id)
    }

    // Commit helpers, crate-private: the store is the only writer.

    pub(crate) fn push_section(&mut self, section: Section) {
        self.sections.push(section);
        self.version += 1;
    }

    pub(crate) fn replace_content(
        &mut self,
        index: usize,
        content: vitae_document::SectionContent,
    ) {
        self.sections[index].content = content;
        self.version += 1;
    }

    pub(crate) fn replace_order(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.version += 1;
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Section {
        let removed = self.sections.remove(index);
        self.version += 1;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_document::{seed_sections, SectionKind};

    #[test]
    fn test_from_sections_starts_at_version_zero() {
        let doc = ResumeDocument::from_sections(seed_sections()).unwrap();
        assert_eq!(doc.version(), 0);
        assert_eq!(doc.len(), 6);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut sections = seed_sections();
        sections[1].id = sections[0].id.clone();

        let err = ResumeDocument::from_sections(sections).unwrap_err();
        assert!(matches!(err, EditorError::DuplicateSection { .. }));
    }

    #[test]
    fn test_lookup_by_id() {
        let doc = ResumeDocument::from_sections(seed_sections()).unwrap();
        let id = doc.sections()[3].id.clone();

        assert_eq!(doc.index_of(&id), Some(3));
        assert_eq!(doc.section(&id).unwrap().kind, SectionKind::Skills);
    }
}
