//! # scriptforge-ai - Chat Relay
//!
//! Forwards a user question plus the currently displayed code snippet to an
//! external chat-completion service and relays the textual answer back.
//!
//! Depends on [`scriptforge_core`] for error handling.
//!
//! ## Public API
//!
//! ### Relay (`relay`)
//! - [`ChatRelay`] - One backend call per question, classified outcome
//! - [`ChatReply`] - `Answer(text)` or `Failed`
//!
//! ### Backend (`backend`)
//! - [`CompletionBackend`] - Seam the relay talks through
//! - [`OpenAiBackend`] - Production chat-completions client
//!
//! ### Prompt (`prompt`)
//! - [`prompt::build_request()`] - Fixed-structure prompt embedding question and code
//!
//! The relay never retries, never caches, and never streams: every `ask`
//! issues at most one backend call, and every failure is terminal for that
//! request.

pub mod backend;
pub mod prompt;
pub mod relay;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use backend::{CompletionBackend, OpenAiBackend, OPENAI_API_URL};
pub use prompt::{CompletionRequest, COMPLETION_MODEL, SYSTEM_PROMPT};
pub use relay::{ChatRelay, ChatReply, EMPTY_QUESTION_GUIDANCE, NO_ANSWER_FALLBACK};
