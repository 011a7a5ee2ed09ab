//! # Vitae Document Model
//!
//! Typed résumé sections and the schema registry that owns their shapes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: sections + patches + registry     │
//! │  - Section: id + kind + title + content     │
//! │  - ContentPatch: validated partial updates  │
//! │  - SectionRegistry: per-kind schema contract│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: document store + reorder + session  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: document → preview fragments     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Content is a tagged union**: each section kind owns a concrete
//!    payload shape — never an untyped blob
//! 2. **Patches, not assignment**: every partial update is validated against
//!    the target kind's schema before anything changes
//! 3. **Identity is immutable**: a section's id never changes for its
//!    lifetime; ordering and content do

mod content;
mod patch;
mod registry;
mod section;
mod seed;

pub use content::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, SectionContent,
};
pub use patch::{ContentPatch, PatchError, PersonalField};
pub use registry::{RegistryError, SectionRegistry, SectionSchema};
pub use section::{Section, SectionId, SectionKind};
pub use seed::seed_sections;
