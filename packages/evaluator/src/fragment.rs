//! Display fragments the preview is assembled from.

use serde::{Deserialize, Serialize};
use vitae_document::SectionId;

/// Rendered preview: one fragment per section, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub fragments: Vec<SectionFragment>,
}

impl Preview {
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// One section's projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFragment {
    pub section_id: SectionId,
    pub title: String,
    pub body: FragmentBody,
}

/// Shape of a fragment body, by section kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FragmentBody {
    /// Personal header: name heading, one contact line, summary paragraph.
    Personal {
        name: String,
        contact: String,
        summary: String,
    },

    /// Badge list (skills).
    Badges { items: Vec<String> },

    /// Entry list (experience, education, projects, certifications).
    Entries { entries: Vec<EntryFragment> },
}

/// One rendered entry of a list-shaped section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryFragment {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

impl EntryFragment {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            subheading: None,
            meta: None,
            body: None,
            tags: Vec::new(),
        }
    }

    pub fn with_subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = Some(subheading.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
