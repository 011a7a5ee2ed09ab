//! # Vitae Evaluator
//!
//! Projects a résumé document into preview fragments, one per section, in
//! document order.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Rendering is fully deterministic.**
//!
//! For any sequence of sections, `render()` MUST produce identical output on
//! every invocation:
//!
//! - Same sections → same fragments (field-for-field identical)
//! - Fragment order is document order, nothing else
//! - No hidden state, no time/random/environment dependence
//!
//! **Why determinism matters:**
//! - The preview re-derives on every state change; flicker-free updates
//!   assume equal input produces equal output
//! - Snapshot comparisons in tests break with non-determinism
//!
//! Idempotence is a required property of the renderer, not an optimization.
//!
//! ## Error Boundaries
//!
//! Rendering never fails on content — content was validated at patch time.
//! The only failure is an unregistered section kind, which is a wiring
//! defect surfaced as `RenderError::Configuration`.

mod fragment;
mod renderer;

#[cfg(test)]
mod tests_render;

pub use fragment::{EntryFragment, FragmentBody, Preview, SectionFragment};
pub use renderer::{RenderError, Renderer};
