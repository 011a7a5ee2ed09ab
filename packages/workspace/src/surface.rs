//! # Builder Surface
//!
//! One open editing surface: document store + assistant session + preview,
//! with generation dispatched off-thread and fed back as events.
//!
//! Mutations never run concurrently — they all happen on whoever holds the
//! surface, in invocation order. The spawned generation task only ever sends
//! an event; it cannot reach the store.

use crate::collaborators::{
    DocumentExporter, DocumentId, DocumentRepository, ExportArtifact, ExportError,
    IdentityProvider, PersistenceError, SaveReceipt,
};
use crate::notice::Notice;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use vitae_assistant::{
    AssistantError, AssistantSession, ContentGenerator, ConversationMessage, GenerationError,
    GenerationResponse, SessionStatus, SuggestedEdit,
};
use vitae_document::{ContentPatch, SectionId, SectionKind, SectionRegistry};
use vitae_editor::{DocumentStore, EditSession, EditorError, ResumeDocument};
use vitae_evaluator::{Preview, RenderError, Renderer};

/// Outcome of work the surface dispatched to the runtime.
#[derive(Debug)]
pub enum SurfaceEvent {
    GenerationFinished {
        request_id: u64,
        outcome: Result<GenerationResponse, GenerationError>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkspaceError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("builder surface is closed")]
    Closed,
}

pub struct BuilderSurface {
    document_id: DocumentId,
    editor: EditSession,
    assistant: AssistantSession,
    renderer: Renderer,
    generator: Arc<dyn ContentGenerator>,
    identity: Arc<dyn IdentityProvider>,
    events_tx: mpsc::UnboundedSender<SurfaceEvent>,
    events_rx: mpsc::UnboundedReceiver<SurfaceEvent>,
    preview: Preview,
    notices: Vec<Notice>,
    closed: bool,
}

impl BuilderSurface {
    /// Open a surface on the sample seed document.
    pub fn open(
        registry: Arc<SectionRegistry>,
        generator: Arc<dyn ContentGenerator>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Result<Self, WorkspaceError> {
        let store = DocumentStore::seeded(Arc::clone(&registry))?;
        Self::with_store(registry, generator, identity, DocumentId::generate(), store)
    }

    /// Open a surface on a previously persisted snapshot.
    pub fn open_snapshot(
        registry: Arc<SectionRegistry>,
        generator: Arc<dyn ContentGenerator>,
        identity: Arc<dyn IdentityProvider>,
        document_id: DocumentId,
        snapshot: ResumeDocument,
    ) -> Result<Self, WorkspaceError> {
        let store = DocumentStore::from_snapshot(Arc::clone(&registry), snapshot)?;
        Self::with_store(registry, generator, identity, document_id, store)
    }

    fn with_store(
        registry: Arc<SectionRegistry>,
        generator: Arc<dyn ContentGenerator>,
        identity: Arc<dyn IdentityProvider>,
        document_id: DocumentId,
        store: DocumentStore,
    ) -> Result<Self, WorkspaceError> {
        let renderer = Renderer::new(registry);
        let preview = renderer.render(store.document().sections())?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            document_id,
            editor: EditSession::new(store),
            assistant: AssistantSession::new(),
            renderer,
            generator,
            identity,
            events_tx,
            events_rx,
            preview,
            notices: Vec::new(),
            closed: false,
        })
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    pub fn document(&self) -> &ResumeDocument {
        self.editor.document()
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn conversation(&self) -> &[ConversationMessage] {
        self.assistant.conversation()
    }

    pub fn assistant_status(&self) -> SessionStatus {
        self.assistant.status()
    }

    pub fn last_assistant_error(&self) -> Option<&AssistantError> {
        self.assistant.last_error()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Hand pending notices to the embedding UI.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ---- document mutations -------------------------------------------

    pub fn create_section(&mut self, kind: SectionKind) -> Result<SectionId, WorkspaceError> {
        self.ensure_open()?;
        let result = self.editor.store_mut().create_section(kind);
        self.finish_mutation(result)
    }

    pub fn update_section(
        &mut self,
        id: &SectionId,
        patch: &ContentPatch,
    ) -> Result<(), WorkspaceError> {
        self.ensure_open()?;
        let result = self.editor.store_mut().update_section_content(id, patch);
        self.finish_mutation(result)
    }

    pub fn remove_section(&mut self, id: &SectionId) -> Result<(), WorkspaceError> {
        self.ensure_open()?;
        self.editor.store_mut().remove_section(id);
        self.refresh_preview()
    }

    pub fn begin_move(&mut self, id: &SectionId) -> Result<(), WorkspaceError> {
        self.ensure_open()?;
        let result = self.editor.begin_move(id);
        // Opening a gesture touches no stored state; no re-render.
        result.map_err(|e| self.notify_failure(e))
    }

    pub fn commit_move(&mut self, destination: usize) -> Result<(), WorkspaceError> {
        self.ensure_open()?;
        let result = self.editor.commit_move(destination);
        self.finish_mutation(result)
    }

    pub fn cancel_move(&mut self) {
        self.editor.cancel_move();
    }

    // ---- assistant ----------------------------------------------------

    /// Submit a prompt and dispatch the generation call.
    ///
    /// Returns the request id; the outcome arrives as a
    /// [`SurfaceEvent::GenerationFinished`] for [`handle_event`].
    ///
    /// [`handle_event`]: Self::handle_event
    pub fn submit_prompt(&mut self, prompt: &str) -> Result<u64, WorkspaceError> {
        self.ensure_open()?;

        let pending = match self.assistant.submit(prompt) {
            Ok(pending) => pending,
            Err(error) => return Err(self.notify_failure(error)),
        };

        let request_id = pending.request_id;
        let generator = Arc::clone(&self.generator);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = generator.generate(pending.request).await;
            // The surface may be gone; a dead channel just drops the event.
            let _ = events.send(SurfaceEvent::GenerationFinished {
                request_id,
                outcome,
            });
        });

        tracing::debug!(request_id, "generation dispatched");
        Ok(request_id)
    }

    /// Wait for the next dispatched outcome and fold it in.
    ///
    /// Returns `false` when the channel is exhausted.
    pub async fn process_next_event(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Fold already-arrived outcomes in without waiting.
    pub fn drain_ready_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Fold one outcome into the session.
    ///
    /// Stale outcomes (surface closed, superseded request id) are discarded
    /// by the session; nothing here mutates the store.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::GenerationFinished {
                request_id,
                outcome,
            } => match outcome {
                Ok(response) => {
                    self.assistant.resolve(request_id, response.text);
                }
                Err(error) => {
                    if self.assistant.reject(request_id, error) {
                        self.notices.push(Notice::error(
                            "Failed to get AI response. Please try again.",
                        ));
                    }
                }
            },
        }
    }

    /// Apply an assistant-proposed edit through the normal store path.
    ///
    /// Re-validated against the current document: a vanished target is a
    /// stale edit, discarded with a notice. The conversation is never
    /// touched either way.
    pub fn apply_suggestion(&mut self, edit: &SuggestedEdit) -> Result<(), WorkspaceError> {
        self.ensure_open()?;

        match self.editor.store_mut().update_section_content(&edit.target, &edit.patch) {
            Ok(()) => {
                self.refresh_preview()?;
                self.notices.push(Notice::info("AI suggestion applied!"));
                Ok(())
            }
            Err(error) => {
                if matches!(error, EditorError::Stale { .. }) {
                    self.notices.push(Notice::error(
                        "That suggestion no longer applies to the document.",
                    ));
                    tracing::debug!(%error, "discarded stale suggestion");
                } else {
                    self.notices.push(Notice::error(error.to_string()));
                }
                Err(error.into())
            }
        }
    }

    // ---- collaborators ------------------------------------------------

    pub async fn save(
        &mut self,
        repository: &dyn DocumentRepository,
    ) -> Result<SaveReceipt, WorkspaceError> {
        self.ensure_open()?;

        let snapshot = self.editor.store().snapshot();
        let owner = self.identity.current_user();
        match repository.save(&self.document_id, &owner, &snapshot).await {
            Ok(receipt) => {
                self.notices.push(Notice::info("Resume saved successfully!"));
                Ok(receipt)
            }
            Err(error) => Err(self.notify_failure(error)),
        }
    }

    pub async fn export(
        &mut self,
        exporter: &dyn DocumentExporter,
    ) -> Result<ExportArtifact, WorkspaceError> {
        self.ensure_open()?;

        let snapshot = self.editor.store().snapshot();
        match exporter.export(&snapshot).await {
            Ok(artifact) => {
                self.notices.push(Notice::info("Resume export started!"));
                Ok(artifact)
            }
            Err(error) => Err(self.notify_failure(error)),
        }
    }

    /// Close the surface. The session becomes no-longer-current: late
    /// generation outcomes are discarded and further mutations fail.
    pub fn close(&mut self) {
        self.assistant.close();
        self.closed = true;
        tracing::debug!(document = %self.document_id, "builder surface closed");
    }

    // ---- internals ----------------------------------------------------

    fn ensure_open(&self) -> Result<(), WorkspaceError> {
        if self.closed {
            return Err(WorkspaceError::Closed);
        }
        Ok(())
    }

    fn finish_mutation<T>(&mut self, result: Result<T, EditorError>) -> Result<T, WorkspaceError> {
        match result {
            Ok(value) => {
                self.refresh_preview()?;
                Ok(value)
            }
            Err(error) => Err(self.notify_failure(error)),
        }
    }

    fn refresh_preview(&mut self) -> Result<(), WorkspaceError> {
        self.preview = self.renderer.render(self.editor.document().sections())?;
        Ok(())
    }

    fn notify_failure<E>(&mut self, error: E) -> WorkspaceError
    where
        E: std::fmt::Display,
        WorkspaceError: From<E>,
    {
        self.notices.push(Notice::error(error.to_string()));
        error.into()
    }
}
