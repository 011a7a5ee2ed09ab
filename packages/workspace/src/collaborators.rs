//! External collaborator contracts: persistence, export, identity.
//!
//! The core treats these as opaque — wire formats and transport are theirs.
//! In-memory implementations back the demo bin and the integration tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;
use vitae_editor::ResumeDocument;

/// Identifier a persisted document is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current user, for ownership stamping only — irrelevant to document
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistenceError {
    #[error("document '{0}' not found")]
    NotFound(DocumentId),

    #[error("persistence failed: {0}")]
    Backend(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("export failed: {0}")]
    Backend(String),
}

/// Acknowledgement of a save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub document_id: DocumentId,
    pub version: u64,
    pub saved_at: DateTime<Utc>,
}

/// Opaque store/retrieve pair for document snapshots.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn save(
        &self,
        id: &DocumentId,
        owner: &UserId,
        document: &ResumeDocument,
    ) -> Result<SaveReceipt, PersistenceError>;

    async fn load(&self, id: &DocumentId) -> Result<ResumeDocument, PersistenceError>;
}

/// Produces a download artifact from a document snapshot.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    async fn export(&self, document: &ResumeDocument) -> Result<ExportArtifact, ExportError>;
}

/// Finished export: a labeled blob, format up to the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Supplies the current user id.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> UserId;
}

/// Fixed identity (demo and tests).
pub struct StaticIdentity(pub UserId);

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> UserId {
        self.0.clone()
    }
}

/// Map-backed repository. Keeps the latest snapshot per document id.
pub struct InMemoryRepository {
    documents: Mutex<HashMap<DocumentId, (UserId, ResumeDocument)>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn save(
        &self,
        id: &DocumentId,
        owner: &UserId,
        document: &ResumeDocument,
    ) -> Result<SaveReceipt, PersistenceError> {
        self.documents
            .lock()
            .unwrap()
            .insert(id.clone(), (owner.clone(), document.clone()));

        Ok(SaveReceipt {
            document_id: id.clone(),
            version: document.version(),
            saved_at: Utc::now(),
        })
    }

    async fn load(&self, id: &DocumentId) -> Result<ResumeDocument, PersistenceError> {
        self.documents
            .lock()
            .unwrap()
            .get(id)
            .map(|(_, doc)| doc.clone())
            .ok_or_else(|| PersistenceError::NotFound(id.clone()))
    }
}

/// Serializes the snapshot as pretty JSON. Stands in for the page-described
/// export format, which is outside this core.
pub struct JsonExporter;

#[async_trait]
impl DocumentExporter for JsonExporter {
    async fn export(&self, document: &ResumeDocument) -> Result<ExportArtifact, ExportError> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| ExportError::Backend(e.to_string()))?;

        Ok(ExportArtifact {
            file_name: "resume.json".to_string(),
            bytes,
        })
    }
}
