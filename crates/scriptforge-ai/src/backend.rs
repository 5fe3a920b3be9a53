//! Completion service backends
//!
//! [`CompletionBackend`] is the seam the relay talks through; the
//! production implementation speaks the OpenAI chat-completions JSON over
//! HTTPS. The scripted test backend lives in [`crate::test_utils`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use scriptforge_core::prelude::*;

use crate::prompt::{CompletionRequest, COMPLETION_MODEL};

/// Default chat-completions endpoint
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// A stalled upstream call fails the request rather than hanging the relay
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat-completion services the relay can talk to
///
/// Returns the answer text when the service produced one; `None` when the
/// response carried no content.
#[trait_variant::make(CompletionBackend: Send)]
pub trait LocalCompletionBackend {
    /// Issue a single completion request
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>>;
}

/// Production backend speaking the OpenAI chat-completions protocol
pub struct OpenAiBackend {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(api_key, OPENAI_API_URL)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::completion(e.to_string()))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }
}

impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>> {
        let body = WireRequest {
            model: COMPLETION_MODEL,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &request.system,
                },
                WireMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::completion(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream_status(status.as_u16()));
        }

        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| Error::completion(e.to_string()))?;

        Ok(parsed.first_content())
    }
}

// ─────────────────────────────────────────────────────────────────
// Wire Types
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Every level is optional: the service may omit choices, the message, or
/// the content, and each case reads as "no answer".
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    #[serde(default)]
    message: Option<WireChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct WireChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl WireResponse {
    fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}
