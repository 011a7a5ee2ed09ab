//! # Vitae Assistant
//!
//! Conversation log, assistant session state machine, and the
//! content-generation collaborator contract.
//!
//! ## Session Protocol
//!
//! ```text
//! Idle --submit(prompt)--> Pending --resolve(text)--> Idle
//!                                  --reject(error)--> Idle
//! ```
//!
//! - At most one Pending request per session; submitting while Pending is
//!   rejected outright (no queueing), which keeps conversation order
//!   deterministic — an assistant reply always lands immediately after its
//!   triggering user message
//! - The user message is appended synchronously, before the asynchronous
//!   call is issued
//! - On failure no assistant message is appended; `last_error` records what
//!   happened and the session returns to Idle
//! - A session whose surface has closed discards late-arriving outcomes
//!   instead of applying them
//!
//! The generation call itself lives behind [`ContentGenerator`]; the session
//! never blocks on it. [`CannedGenerator`] ships a deterministic stand-in
//! (cycled canned responses, optional simulated latency) and
//! [`ScriptedGenerator`] resolves or fails on command for state-machine
//! tests.

mod generator;
mod message;
mod session;
mod suggestion;

pub use generator::{
    CannedGenerator, ContentGenerator, GenerationError, GenerationRequest, GenerationResponse,
    ScriptedGenerator,
};
pub use message::{ConversationMessage, MessageRole};
pub use session::{AssistantError, AssistantSession, PendingGeneration, SessionStatus};
pub use suggestion::SuggestedEdit;
