//! The chat relay
//!
//! One backend call per question, with the outcome collapsed to either an
//! answer string or a generic failure. Upstream error detail is logged here
//! and never reaches the caller.

use scriptforge_core::prelude::*;

use crate::backend::CompletionBackend;
use crate::prompt;

/// Returned without contacting the backend when the question is empty
pub const EMPTY_QUESTION_GUIDANCE: &str = "Please type a question or describe your project.";

/// Returned when the service answered with no content
pub const NO_ANSWER_FALLBACK: &str = "No answer returned from AI.";

/// Outcome of a relay call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// Text to display verbatim (including the guidance and fallback texts)
    Answer(String),
    /// The backend call failed; the caller reports a generic error
    Failed,
}

/// Forwards question + snippet pairs to a completion backend
pub struct ChatRelay<B> {
    backend: B,
}

impl<B: CompletionBackend> ChatRelay<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Ask the completion service about `code`.
    ///
    /// An empty-after-trim question is rejected locally with the fixed
    /// guidance message and zero backend calls. Otherwise exactly one
    /// backend call is issued: no retry, no caching.
    pub async fn ask(&self, question: &str, code: &str) -> ChatReply {
        let question = question.trim();
        if question.is_empty() {
            debug!("empty question, skipping completion call");
            return ChatReply::Answer(EMPTY_QUESTION_GUIDANCE.to_string());
        }

        let request = prompt::build_request(question, code);
        match self.backend.complete(&request).await {
            Ok(Some(answer)) if !answer.is_empty() => ChatReply::Answer(answer),
            Ok(_) => ChatReply::Answer(NO_ANSWER_FALLBACK.to_string()),
            Err(err) => {
                error!("completion request failed: {err}");
                ChatReply::Failed
            }
        }
    }
}
