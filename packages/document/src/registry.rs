//! # Section Registry
//!
//! Per-kind schema contract: default content, validation, and patch
//! application for each section kind.
//!
//! Looking up a kind that was never registered is a wiring defect, not a
//! runtime condition — `RegistryError::Unregistered` is fatal and aborts
//! initialization of the affected section type.

use crate::content::SectionContent;
use crate::patch::{ContentPatch, PatchError, PersonalField};
use crate::section::SectionKind;
use std::collections::HashMap;
use thiserror::Error;

/// Registry lookup failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("no schema registered for section kind '{0}'")]
    Unregistered(SectionKind),
}

/// Contract every section kind implements.
///
/// `validate` and `apply` are pure: `apply` returns a fresh payload and never
/// mutates its input, so a rejected patch cannot leave partial state behind.
pub trait SectionSchema: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> SectionKind;

    fn default_title(&self) -> &'static str;

    fn default_content(&self) -> SectionContent;

    fn validate(&self, content: &SectionContent) -> Result<(), PatchError>;

    fn apply(
        &self,
        content: &SectionContent,
        patch: &ContentPatch,
    ) -> Result<SectionContent, PatchError>;
}

/// Maps section kinds to their schemas.
pub struct SectionRegistry {
    schemas: HashMap<SectionKind, Box<dyn SectionSchema>>,
}

impl SectionRegistry {
    /// Registry with nothing registered (tests exercise the unregistered
    /// path through this).
    pub fn empty() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Registry with all six standard kinds registered.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(PersonalSchema));
        registry.register(Box::new(EducationSchema));
        registry.register(Box::new(ExperienceSchema));
        registry.register(Box::new(ProjectsSchema));
        registry.register(Box::new(SkillsSchema));
        registry.register(Box::new(CertificationsSchema));
        registry
    }

    pub fn register(&mut self, schema: Box<dyn SectionSchema>) {
        self.schemas.insert(schema.kind(), schema);
    }

    pub fn schema_for(&self, kind: SectionKind) -> Result<&dyn SectionSchema, RegistryError> {
        self.schemas
            .get(&kind)
            .map(|s| s.as_ref())
            .ok_or(RegistryError::Unregistered(kind))
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn kind_mismatch(schema: SectionKind, content: &SectionContent) -> PatchError {
    PatchError::KindMismatch {
        patch: schema,
        section: content.kind(),
    }
}

fn patch_mismatch(patch: &ContentPatch, schema: SectionKind) -> PatchError {
    PatchError::KindMismatch {
        patch: patch.target_kind(),
        section: schema,
    }
}

fn check_index(kind: SectionKind, index: usize, len: usize) -> Result<(), PatchError> {
    if index >= len {
        return Err(PatchError::EntryOutOfRange { kind, index, len });
    }
    Ok(())
}

#[derive(Debug)]
struct PersonalSchema;

impl SectionSchema for PersonalSchema {
    fn kind(&self) -> SectionKind {
        SectionKind::Personal
    }

    fn default_title(&self) -> &'static str {
        "Personal Information"
    }

    fn default_content(&self) -> SectionContent {
        SectionContent::empty(SectionKind::Personal)
    }

    fn validate(&self, content: &SectionContent) -> Result<(), PatchError> {
        match content {
            SectionContent::Personal { .. } => Ok(()),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }

    fn apply(
        &self,
        content: &SectionContent,
        patch: &ContentPatch,
    ) -> Result<SectionContent, PatchError> {
        let SectionContent::Personal {
            name,
            email,
            phone,
            location,
            summary,
        } = content
        else {
            return Err(kind_mismatch(self.kind(), content));
        };

        match patch {
            ContentPatch::SetPersonalField { field, value } => {
                let mut name = name.clone();
                let mut email = email.clone();
                let mut phone = phone.clone();
                let mut location = location.clone();
                let mut summary = summary.clone();

                match field {
                    PersonalField::Name => name = value.clone(),
                    PersonalField::Email => email = value.clone(),
                    PersonalField::Phone => phone = value.clone(),
                    PersonalField::Location => location = value.clone(),
                    PersonalField::Summary => summary = value.clone(),
                }

                Ok(SectionContent::Personal {
                    name,
                    email,
                    phone,
                    location,
                    summary,
                })
            }
            other => Err(patch_mismatch(other, self.kind())),
        }
    }
}

#[derive(Debug)]
struct SkillsSchema;

impl SectionSchema for SkillsSchema {
    fn kind(&self) -> SectionKind {
        SectionKind::Skills
    }

    fn default_title(&self) -> &'static str {
        "Skills"
    }

    fn default_content(&self) -> SectionContent {
        SectionContent::empty(SectionKind::Skills)
    }

    fn validate(&self, content: &SectionContent) -> Result<(), PatchError> {
        let SectionContent::Skills { skills } = content else {
            return Err(kind_mismatch(self.kind(), content));
        };

        for (i, skill) in skills.iter().enumerate() {
            if skill.trim().is_empty() {
                return Err(PatchError::EmptySkill);
            }
            if skills[..i].iter().any(|s| s == skill) {
                return Err(PatchError::DuplicateSkill(skill.clone()));
            }
        }
        Ok(())
    }

    fn apply(
        &self,
        content: &SectionContent,
        patch: &ContentPatch,
    ) -> Result<SectionContent, PatchError> {
        let SectionContent::Skills { skills } = content else {
            return Err(kind_mismatch(self.kind(), content));
        };

        match patch {
            ContentPatch::AddSkill { skill } => {
                let skill = skill.trim();
                if skill.is_empty() {
                    return Err(PatchError::EmptySkill);
                }
                if skills.iter().any(|s| s == skill) {
                    return Err(PatchError::DuplicateSkill(skill.to_string()));
                }

                let mut skills = skills.clone();
                skills.push(skill.to_string());
                Ok(SectionContent::Skills { skills })
            }
            ContentPatch::RemoveSkill { skill } => {
                let mut skills = skills.clone();
                skills.retain(|s| s != skill);
                Ok(SectionContent::Skills { skills })
            }
            other => Err(patch_mismatch(other, self.kind())),
        }
    }
}

#[derive(Debug)]
struct EducationSchema;

impl SectionSchema for EducationSchema {
    fn kind(&self) -> SectionKind {
        SectionKind::Education
    }

    fn default_title(&self) -> &'static str {
        "Education"
    }

    fn default_content(&self) -> SectionContent {
        SectionContent::empty(SectionKind::Education)
    }

    fn validate(&self, content: &SectionContent) -> Result<(), PatchError> {
        match content {
            SectionContent::Education { .. } => Ok(()),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }

    fn apply(
        &self,
        content: &SectionContent,
        patch: &ContentPatch,
    ) -> Result<SectionContent, PatchError> {
        let SectionContent::Education { entries } = content else {
            return Err(kind_mismatch(self.kind(), content));
        };

        match patch {
            ContentPatch::AddEducation { entry } => {
                let mut entries = entries.clone();
                entries.push(entry.clone());
                Ok(SectionContent::Education { entries })
            }
            ContentPatch::UpdateEducation { index, entry } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries[*index] = entry.clone();
                Ok(SectionContent::Education { entries })
            }
            ContentPatch::RemoveEducation { index } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries.remove(*index);
                Ok(SectionContent::Education { entries })
            }
            other => Err(patch_mismatch(other, self.kind())),
        }
    }
}

#[derive(Debug)]
struct ExperienceSchema;

impl SectionSchema for ExperienceSchema {
    fn kind(&self) -> SectionKind {
        SectionKind::Experience
    }

    fn default_title(&self) -> &'static str {
        "Work Experience"
    }

    fn default_content(&self) -> SectionContent {
        SectionContent::empty(SectionKind::Experience)
    }

    fn validate(&self, content: &SectionContent) -> Result<(), PatchError> {
        match content {
            SectionContent::Experience { .. } => Ok(()),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }

    fn apply(
        &self,
        content: &SectionContent,
        patch: &ContentPatch,
    ) -> Result<SectionContent, PatchError> {
        let SectionContent::Experience { entries } = content else {
            return Err(kind_mismatch(self.kind(), content));
        };

        match patch {
            ContentPatch::AddExperience { entry } => {
                let mut entries = entries.clone();
                entries.push(entry.clone());
                Ok(SectionContent::Experience { entries })
            }
            ContentPatch::UpdateExperience { index, entry } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries[*index] = entry.clone();
                Ok(SectionContent::Experience { entries })
            }
            ContentPatch::RemoveExperience { index } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries.remove(*index);
                Ok(SectionContent::Experience { entries })
            }
            other => Err(patch_mismatch(other, self.kind())),
        }
    }
}

#[derive(Debug)]
struct ProjectsSchema;

impl SectionSchema for ProjectsSchema {
    fn kind(&self) -> SectionKind {
        SectionKind::Projects
    }

    fn default_title(&self) -> &'static str {
        "Projects"
    }

    fn default_content(&self) -> SectionContent {
        SectionContent::empty(SectionKind::Projects)
    }

    fn validate(&self, content: &SectionContent) -> Result<(), PatchError> {
        match content {
            SectionContent::Projects { .. } => Ok(()),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }

    fn apply(
        &self,
        content: &SectionContent,
        patch: &ContentPatch,
    ) -> Result<SectionContent, PatchError> {
        let SectionContent::Projects { entries } = content else {
            return Err(kind_mismatch(self.kind(), content));
        };

        match patch {
            ContentPatch::AddProject { entry } => {
                let mut entries = entries.clone();
                entries.push(entry.clone());
                Ok(SectionContent::Projects { entries })
            }
            ContentPatch::UpdateProject { index, entry } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries[*index] = entry.clone();
                Ok(SectionContent::Projects { entries })
            }
            ContentPatch::RemoveProject { index } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries.remove(*index);
                Ok(SectionContent::Projects { entries })
            }
            other => Err(patch_mismatch(other, self.kind())),
        }
    }
}

#[derive(Debug)]
struct CertificationsSchema;

impl SectionSchema for CertificationsSchema {
    fn kind(&self) -> SectionKind {
        SectionKind::Certifications
    }

    fn default_title(&self) -> &'static str {
        "Certifications"
    }

    fn default_content(&self) -> SectionContent {
        SectionContent::empty(SectionKind::Certifications)
    }

    fn validate(&self, content: &SectionContent) -> Result<(), PatchError> {
        match content {
            SectionContent::Certifications { .. } => Ok(()),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }

    fn apply(
        &self,
        content: &SectionContent,
        patch: &ContentPatch,
    ) -> Result<SectionContent, PatchError> {
        let SectionContent::Certifications { entries } = content else {
            return Err(kind_mismatch(self.kind(), content));
        };

        match patch {
            ContentPatch::AddCertification { entry } => {
                let mut entries = entries.clone();
                entries.push(entry.clone());
                Ok(SectionContent::Certifications { entries })
            }
            ContentPatch::UpdateCertification { index, entry } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries[*index] = entry.clone();
                Ok(SectionContent::Certifications { entries })
            }
            ContentPatch::RemoveCertification { index } => {
                check_index(self.kind(), *index, entries.len())?;
                let mut entries = entries.clone();
                entries.remove(*index);
                Ok(SectionContent::Certifications { entries })
            }
            other => Err(patch_mismatch(other, self.kind())),
        }
    }
}
