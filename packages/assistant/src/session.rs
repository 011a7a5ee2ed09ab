//! # Assistant Session
//!
//! Conversation log plus the single-in-flight request state machine.
//!
//! The session never performs the generation call itself: `submit` appends
//! the user message, flips to Pending and hands back the request payload;
//! whoever dispatched the call feeds the outcome to `resolve` / `reject`
//! with the request id it was given. Outcomes carrying a non-current id
//! (a second surface lifecycle, a response arriving after `close`) are
//! discarded without touching the conversation.

use crate::generator::{GenerationError, GenerationRequest};
use crate::message::ConversationMessage;
use thiserror::Error;

/// Greeting a fresh session opens with.
const GREETING: &str = "Hi! I'm your AI resume assistant. I can help you:\n\n\
\u{2022} Generate professional content for any section\n\
\u{2022} Improve your existing descriptions\n\
\u{2022} Tailor your resume for specific job roles\n\
\u{2022} Fix grammar and enhance readability\n\n\
What would you like help with today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Pending,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssistantError {
    /// Submission attempted while a request is Pending. No queueing.
    #[error("a generation request is already in flight")]
    RequestInFlight,

    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The generation call failed.
    #[error(transparent)]
    RequestFailed(#[from] GenerationError),

    /// The surface owning this session has closed.
    #[error("assistant session is closed")]
    Closed,
}

/// Payload `submit` hands to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingGeneration {
    pub request_id: u64,
    pub request: GenerationRequest,
}

pub struct AssistantSession {
    conversation: Vec<ConversationMessage>,
    status: SessionStatus,
    last_error: Option<AssistantError>,
    next_request_id: u64,
    current_request: Option<u64>,
    closed: bool,
}

impl AssistantSession {
    /// Session seeded with the assistant greeting.
    pub fn new() -> Self {
        let mut session = Self::empty();
        session
            .conversation
            .push(ConversationMessage::assistant(GREETING));
        session
    }

    /// Session with an empty conversation.
    pub fn empty() -> Self {
        Self {
            conversation: Vec::new(),
            status: SessionStatus::Idle,
            last_error: None,
            next_request_id: 0,
            current_request: None,
            closed: false,
        }
    }

    pub fn conversation(&self) -> &[ConversationMessage] {
        &self.conversation
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&AssistantError> {
        self.last_error.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Record a user prompt and open a generation request.
    ///
    /// The user message is appended synchronously, before any asynchronous
    /// work happens; the returned payload carries the conversation as it
    /// stood prior to this submission.
    pub fn submit(&mut self, prompt: &str) -> Result<PendingGeneration, AssistantError> {
        if self.closed {
            return Err(AssistantError::Closed);
        }
        if self.status == SessionStatus::Pending {
            return Err(AssistantError::RequestInFlight);
        }

        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }

        let history = self.conversation.clone();
        self.conversation.push(ConversationMessage::user(prompt));

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.current_request = Some(request_id);
        self.status = SessionStatus::Pending;

        tracing::debug!(request_id, "assistant request opened");
        Ok(PendingGeneration {
            request_id,
            request: GenerationRequest {
                history,
                prompt: prompt.to_string(),
            },
        })
    }

    /// Record a successful outcome. Returns whether it was applied.
    ///
    /// The assistant message lands immediately after its triggering user
    /// message — nothing else can have been appended while the request was
    /// in flight, because only one request is ever Pending.
    pub fn resolve(&mut self, request_id: u64, text: impl Into<String>) -> bool {
        if !self.accepts(request_id) {
            tracing::debug!(request_id, "discarding stale assistant response");
            return false;
        }

        self.conversation.push(ConversationMessage::assistant(text));
        self.current_request = None;
        self.status = SessionStatus::Idle;
        self.last_error = None;
        true
    }

    /// Record a failed outcome. Returns whether it was applied.
    pub fn reject(&mut self, request_id: u64, error: GenerationError) -> bool {
        if !self.accepts(request_id) {
            tracing::debug!(request_id, "discarding stale assistant failure");
            return false;
        }

        tracing::warn!(request_id, %error, "assistant request failed");
        self.current_request = None;
        self.status = SessionStatus::Idle;
        self.last_error = Some(AssistantError::RequestFailed(error));
        true
    }

    /// Mark the session no-longer-current. Late-arriving outcomes are
    /// discarded from here on; further submissions fail with `Closed`.
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn accepts(&self, request_id: u64) -> bool {
        !self.closed && self.current_request == Some(request_id)
    }
}

impl Default for AssistantSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageRole;

    #[test]
    fn test_fresh_session_opens_with_greeting() {
        let session = AssistantSession::new();
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation()[0].role, MessageRole::Assistant);
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_submit_appends_user_message_synchronously() {
        let mut session = AssistantSession::empty();
        let pending = session.submit("Improve my summary").unwrap();

        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation()[0].role, MessageRole::User);
        assert_eq!(session.conversation()[0].text, "Improve my summary");
        assert_eq!(session.status(), SessionStatus::Pending);

        // History excludes the message the prompt itself produced.
        assert!(pending.request.history.is_empty());
        assert_eq!(pending.request.prompt, "Improve my summary");
    }

    #[test]
    fn test_submit_while_pending_is_rejected_outright() {
        let mut session = AssistantSession::empty();
        session.submit("first").unwrap();

        let err = session.submit("second").unwrap_err();
        assert_eq!(err, AssistantError::RequestInFlight);

        // The rejected submission left no trace.
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.status(), SessionStatus::Pending);
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let mut session = AssistantSession::empty();
        assert_eq!(
            session.submit("   ").unwrap_err(),
            AssistantError::EmptyPrompt
        );
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_resolve_appends_adjacent_assistant_message() {
        let mut session = AssistantSession::new();
        let before = session.conversation().len();

        let pending = session.submit("help").unwrap();
        assert!(session.resolve(pending.request_id, "suggestion"));

        let conversation = session.conversation();
        assert_eq!(conversation.len(), before + 2);
        assert_eq!(conversation[before].role, MessageRole::User);
        assert_eq!(conversation[before + 1].role, MessageRole::Assistant);
        assert_eq!(conversation[before + 1].text, "suggestion");
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_reject_leaves_only_the_user_message() {
        let mut session = AssistantSession::empty();
        let pending = session.submit("help").unwrap();

        session.reject(
            pending.request_id,
            GenerationError::Failed("boom".to_string()),
        );

        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation()[0].role, MessageRole::User);
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(matches!(
            session.last_error(),
            Some(AssistantError::RequestFailed(_))
        ));
    }

    #[test]
    fn test_session_recovers_after_failure() {
        let mut session = AssistantSession::empty();
        let pending = session.submit("first").unwrap();
        session.reject(
            pending.request_id,
            GenerationError::TimedOut { seconds: 30 },
        );

        let pending = session.submit("second").unwrap();
        assert!(session.resolve(pending.request_id, "better"));
        assert_eq!(session.conversation().len(), 3);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_mismatched_request_id_is_discarded() {
        let mut session = AssistantSession::empty();
        let pending = session.submit("help").unwrap();

        assert!(!session.resolve(pending.request_id + 7, "ghost"));
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.status(), SessionStatus::Pending);
    }

    #[test]
    fn test_closed_session_discards_late_outcome() {
        let mut session = AssistantSession::empty();
        let pending = session.submit("help").unwrap();

        session.close();

        assert!(!session.resolve(pending.request_id, "late"));
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(
            session.submit("again").unwrap_err(),
            AssistantError::Closed
        );
    }
}
