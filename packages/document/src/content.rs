//! Typed content payloads, one shape per section kind.

use crate::section::SectionKind;
use serde::{Deserialize, Serialize};

/// Content payload of a section, tagged by kind.
///
/// Skills are modeled as a set of distinct strings; display order follows
/// insertion order, but duplicates never enter the collection (the schema
/// rejects them at patch time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SectionContent {
    Personal {
        name: String,
        email: String,
        phone: String,
        location: String,
        summary: String,
    },
    Education {
        entries: Vec<EducationEntry>,
    },
    Experience {
        entries: Vec<ExperienceEntry>,
    },
    Projects {
        entries: Vec<ProjectEntry>,
    },
    Skills {
        skills: Vec<String>,
    },
    Certifications {
        entries: Vec<CertificationEntry>,
    },
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Personal { .. } => SectionKind::Personal,
            Self::Education { .. } => SectionKind::Education,
            Self::Experience { .. } => SectionKind::Experience,
            Self::Projects { .. } => SectionKind::Projects,
            Self::Skills { .. } => SectionKind::Skills,
            Self::Certifications { .. } => SectionKind::Certifications,
        }
    }

    /// Empty payload for a kind (used by `create_section` defaults).
    pub fn empty(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Personal => Self::Personal {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                location: String::new(),
                summary: String::new(),
            },
            SectionKind::Education => Self::Education { entries: Vec::new() },
            SectionKind::Experience => Self::Experience { entries: Vec::new() },
            SectionKind::Projects => Self::Projects { entries: Vec::new() },
            SectionKind::Skills => Self::Skills { skills: Vec::new() },
            SectionKind::Certifications => Self::Certifications { entries: Vec::new() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub gpa: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}
