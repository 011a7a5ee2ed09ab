//! Section identity and the typed section record.

use crate::content::SectionContent;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable unique identifier for a section.
///
/// Identity is immutable for the section's lifetime; reordering and content
/// edits never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id (e.g. one read back from persistence).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The six section kinds a résumé document is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Personal,
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl SectionKind {
    /// All kinds, in no particular document order.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Personal,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One titled, typed block of a résumé document.
///
/// The `content` shape is owned by the registry schema for `kind`; a
/// `Section` is only ever constructed or patched through values that schema
/// has accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub kind: SectionKind,
    pub title: String,
    pub content: SectionContent,
}

impl Section {
    /// Create a section with a freshly generated id.
    pub fn new(kind: SectionKind, title: impl Into<String>, content: SectionContent) -> Self {
        Self {
            id: SectionId::generate(),
            kind,
            title: title.into(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = SectionId::generate();
        let b = SectionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_kind_round_trips_through_json() {
        for kind in SectionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: SectionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&SectionKind::Certifications).unwrap();
        assert_eq!(json, "\"certifications\"");
    }
}
