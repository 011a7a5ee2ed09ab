//! The content-generation collaborator contract and two local generators.

use crate::message::ConversationMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// Request issued for each user submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Conversation prior to this submission, in order.
    pub history: Vec<ConversationMessage>,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
}

/// Failures of the generation call.
///
/// When a failure fires is collaborator policy; the core only requires each
/// issued request to eventually resolve or fail. Timeouts are not a separate
/// session state — they arrive as a delayed rejection like any other error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("content generation failed: {0}")]
    Failed(String),

    #[error("content generation timed out after {seconds}s")]
    TimedOut { seconds: u64 },
}

/// External service that turns a prompt plus history into suggested text.
///
/// Latency and phrasing are unconstrained. Implementations must eventually
/// resolve or fail every request issued while the session was Idle.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;
}

const CANNED_INTROS: [&str; 4] = [
    "Here's a professional summary that highlights your key strengths and experience:",
    "I'll help you improve that section. Here's a more impactful version:",
    "Based on your experience, here's how you can better showcase your achievements:",
    "Let me suggest some powerful action verbs and metrics to strengthen your descriptions:",
];

const CANNED_BULLETS: &str = "\u{2022} Led cross-functional teams of 5+ engineers to deliver high-impact projects\n\
\u{2022} Increased system performance by 40% through optimization initiatives\n\
\u{2022} Implemented automated testing frameworks, reducing deployment time by 60%";

/// Deterministic local generator: cycles through canned intro lines and
/// appends a fixed bullet block, optionally after a simulated latency.
///
/// Stands in for a real collaborator in the demo; replace it with a service
/// client at integration time.
pub struct CannedGenerator {
    latency: Duration,
    calls: AtomicUsize,
}

impl CannedGenerator {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Default for CannedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentGenerator for CannedGenerator {
    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        let intro = CANNED_INTROS[call % CANNED_INTROS.len()];

        Ok(GenerationResponse {
            text: format!("{intro}\n\n{CANNED_BULLETS}"),
        })
    }
}

/// Generator that resolves or fails on command, in submission order.
///
/// Push planned outcomes before driving the session; each `generate` call
/// consumes the next one. Calling with an empty script fails the request,
/// so a test that forgets to plan an outcome fails loudly.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<String, GenerationError>>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push_ok(&self, text: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_err(&self, error: GenerationError) {
        self.script.lock().unwrap().push_back(Err(error));
    }
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(GenerationResponse { text }),
            Some(Err(error)) => Err(error),
            None => Err(GenerationError::Failed(
                "no scripted outcome queued".to_string(),
            )),
        }
    }
}
