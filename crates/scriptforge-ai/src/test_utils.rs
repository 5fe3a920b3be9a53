//! Test utilities for relay backends
//!
//! Provides a scripted backend that records call counts and the last
//! request, for verifying the relay's zero-call and one-call properties.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use scriptforge_core::prelude::*;

use crate::backend::CompletionBackend;
use crate::prompt::CompletionRequest;

/// What the scripted backend does when called
#[derive(Debug, Clone)]
enum ScriptedOutcome {
    Answer(String),
    MissingContent,
    Fail,
    UpstreamStatus(u16),
}

/// A completion backend that follows a script instead of the network
pub struct ScriptedBackend {
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
    outcome: ScriptedOutcome,
}

impl ScriptedBackend {
    fn with_outcome(outcome: ScriptedOutcome) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            outcome,
        }
    }

    /// Backend that answers every request with `text`
    pub fn answering(text: &str) -> Self {
        Self::with_outcome(ScriptedOutcome::Answer(text.to_string()))
    }

    /// Backend that responds successfully but with no answer content
    pub fn missing_content() -> Self {
        Self::with_outcome(ScriptedOutcome::MissingContent)
    }

    /// Backend whose requests fail at the transport layer
    pub fn failing() -> Self {
        Self::with_outcome(ScriptedOutcome::Fail)
    }

    /// Backend whose requests come back with a non-success HTTP status
    pub fn upstream_status(status: u16) -> Self {
        Self::with_outcome(ScriptedOutcome::UpstreamStatus(status))
    }

    /// Number of completion calls issued so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any call was made
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.outcome {
            ScriptedOutcome::Answer(text) => Ok(Some(text.clone())),
            ScriptedOutcome::MissingContent => Ok(None),
            ScriptedOutcome::Fail => Err(Error::completion("scripted transport failure")),
            ScriptedOutcome::UpstreamStatus(status) => Err(Error::upstream_status(*status)),
        }
    }
}
