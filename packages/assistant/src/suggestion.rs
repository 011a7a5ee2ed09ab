//! Assistant-proposed document edits.

use serde::{Deserialize, Serialize};
use vitae_document::{ContentPatch, SectionId};

/// A patch the assistant proposes for one section.
///
/// Applying it goes through the same store path as a manual edit and is
/// re-validated against the *current* document at apply time — the document
/// may have changed shape since the suggestion was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedEdit {
    pub target: SectionId,
    pub patch: ContentPatch,
}
