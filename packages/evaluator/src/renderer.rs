//! Pure section → fragment projection.

use crate::fragment::{EntryFragment, FragmentBody, Preview, SectionFragment};
use std::sync::Arc;
use thiserror::Error;
use vitae_document::{RegistryError, Section, SectionContent, SectionRegistry};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("configuration error: {0}")]
    Configuration(#[from] RegistryError),
}

pub struct Renderer {
    registry: Arc<SectionRegistry>,
}

impl Renderer {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self { registry }
    }

    /// Project sections into preview fragments, in order.
    ///
    /// Pure: equal input yields equal output on every call.
    pub fn render(&self, sections: &[Section]) -> Result<Preview, RenderError> {
        let mut fragments = Vec::with_capacity(sections.len());
        for section in sections {
            // Content shape is schema-owned; an unregistered kind here is a
            // wiring defect, same as at patch time.
            self.registry.schema_for(section.kind)?;

            fragments.push(SectionFragment {
                section_id: section.id.clone(),
                title: section.title.clone(),
                body: render_body(&section.content),
            });
        }
        Ok(Preview { fragments })
    }
}

fn render_body(content: &SectionContent) -> FragmentBody {
    match content {
        SectionContent::Personal {
            name,
            email,
            phone,
            location,
            summary,
        } => FragmentBody::Personal {
            name: name.clone(),
            contact: format!("{email} • {phone} • {location}"),
            summary: summary.clone(),
        },

        SectionContent::Skills { skills } => FragmentBody::Badges {
            items: skills.clone(),
        },

        SectionContent::Experience { entries } => FragmentBody::Entries {
            entries: entries
                .iter()
                .map(|e| {
                    EntryFragment::new(&e.position)
                        .with_subheading(&e.company)
                        .with_meta(&e.duration)
                        .with_body(&e.description)
                })
                .collect(),
        },

        SectionContent::Education { entries } => FragmentBody::Entries {
            entries: entries
                .iter()
                .map(|e| {
                    let fragment = EntryFragment::new(&e.degree)
                        .with_subheading(&e.institution)
                        .with_meta(&e.duration);
                    if e.gpa.is_empty() {
                        fragment
                    } else {
                        fragment.with_body(format!("GPA: {}", e.gpa))
                    }
                })
                .collect(),
        },

        SectionContent::Projects { entries } => FragmentBody::Entries {
            entries: entries
                .iter()
                .map(|e| {
                    EntryFragment::new(&e.name)
                        .with_body(&e.description)
                        .with_tags(e.technologies.clone())
                })
                .collect(),
        },

        SectionContent::Certifications { entries } => FragmentBody::Entries {
            entries: entries
                .iter()
                .map(|e| {
                    EntryFragment::new(&e.name)
                        .with_subheading(&e.issuer)
                        .with_meta(&e.date)
                })
                .collect(),
        },
    }
}
