//! # Vitae Workspace
//!
//! The builder surface: one editing surface wiring the document store, the
//! assistant session and the preview renderer together, plus the contracts
//! for the external collaborators (persistence, export, identity).
//!
//! ## Concurrency Model
//!
//! Single logical thread of control per surface — event-driven and
//! cooperative, not multi-threaded. The sole suspension point is the
//! content-generation call, dispatched as a background task; the store is
//! never locked by a pending request, so edits, reorders and removals stay
//! fully usable while the assistant thinks. Outcomes come back as
//! [`SurfaceEvent`]s on a channel the surface drains, which serializes every
//! document mutation in invocation order.
//!
//! Because the document can change shape between issue and arrival, an
//! assistant suggestion is re-validated against the *current* document at
//! apply time; a vanished target is a stale edit — discarded with a notice,
//! never forcibly re-created. Closing the surface marks the session
//! no-longer-current and late outcomes are dropped on the floor.

mod collaborators;
mod notice;
mod surface;

pub use collaborators::{
    DocumentExporter, DocumentId, DocumentRepository, ExportArtifact, ExportError,
    IdentityProvider, InMemoryRepository, JsonExporter, PersistenceError, SaveReceipt,
    StaticIdentity, UserId,
};
pub use notice::{Notice, NoticeLevel};
pub use surface::{BuilderSurface, SurfaceEvent, WorkspaceError};
