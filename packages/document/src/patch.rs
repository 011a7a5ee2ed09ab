//! # Content Patches
//!
//! High-level partial updates to section content.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each patch represents one semantic edit
//! 2. **Validated**: every patch is checked against the target kind's schema
//!    before any state changes
//! 3. **Atomic**: a rejected patch leaves the content byte-for-byte unchanged
//!
//! ## Patch Semantics
//!
//! ### AddSkill
//! - Skills form a set of distinct strings; adding a duplicate fails
//! - Input is trimmed before comparison and insertion
//!
//! ### Update*/Remove* (entry lists)
//! - Addressed by position; an out-of-range index fails without effect
//!
//! ### RemoveSkill
//! - Removing an absent skill is a no-op (the resulting content is equal to
//!   the input)

use crate::content::{CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry};
use crate::section::SectionKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Addressable fields of the personal section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Summary,
}

/// Semantic partial updates to a section's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentPatch {
    /// Replace one field of a personal section
    SetPersonalField {
        field: PersonalField,
        value: String,
    },

    /// Add a distinct skill (trimmed; duplicates rejected)
    AddSkill {
        skill: String,
    },

    /// Remove a skill if present
    RemoveSkill {
        skill: String,
    },

    AddEducation {
        entry: EducationEntry,
    },
    UpdateEducation {
        index: usize,
        entry: EducationEntry,
    },
    RemoveEducation {
        index: usize,
    },

    AddExperience {
        entry: ExperienceEntry,
    },
    UpdateExperience {
        index: usize,
        entry: ExperienceEntry,
    },
    RemoveExperience {
        index: usize,
    },

    AddProject {
        entry: ProjectEntry,
    },
    UpdateProject {
        index: usize,
        entry: ProjectEntry,
    },
    RemoveProject {
        index: usize,
    },

    AddCertification {
        entry: CertificationEntry,
    },
    UpdateCertification {
        index: usize,
        entry: CertificationEntry,
    },
    RemoveCertification {
        index: usize,
    },
}

impl ContentPatch {
    /// The section kind this patch can apply to.
    pub fn target_kind(&self) -> SectionKind {
        match self {
            Self::SetPersonalField { .. } => SectionKind::Personal,
            Self::AddSkill { .. } | Self::RemoveSkill { .. } => SectionKind::Skills,
            Self::AddEducation { .. }
            | Self::UpdateEducation { .. }
            | Self::RemoveEducation { .. } => SectionKind::Education,
            Self::AddExperience { .. }
            | Self::UpdateExperience { .. }
            | Self::RemoveExperience { .. } => SectionKind::Experience,
            Self::AddProject { .. } | Self::UpdateProject { .. } | Self::RemoveProject { .. } => {
                SectionKind::Projects
            }
            Self::AddCertification { .. }
            | Self::UpdateCertification { .. }
            | Self::RemoveCertification { .. } => SectionKind::Certifications,
        }
    }
}

/// Schema violations raised while validating or applying a patch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    #[error("patch targets '{patch}' content but section holds '{section}'")]
    KindMismatch {
        patch: SectionKind,
        section: SectionKind,
    },

    #[error("skill already present: '{0}'")]
    DuplicateSkill(String),

    #[error("skill must not be empty")]
    EmptySkill,

    #[error("entry index {index} out of range for '{kind}' section of length {len}")]
    EntryOutOfRange {
        kind: SectionKind,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serialization() {
        let patch = ContentPatch::AddSkill {
            skill: "Rust".to_string(),
        };

        let json = serde_json::to_string(&patch).unwrap();
        let deserialized: ContentPatch = serde_json::from_str(&json).unwrap();

        assert_eq!(patch, deserialized);
    }

    #[test]
    fn test_target_kind_covers_every_variant() {
        let patch = ContentPatch::SetPersonalField {
            field: PersonalField::Email,
            value: "a@b.c".to_string(),
        };
        assert_eq!(patch.target_kind(), SectionKind::Personal);

        let patch = ContentPatch::RemoveCertification { index: 0 };
        assert_eq!(patch.target_kind(), SectionKind::Certifications);
    }
}
