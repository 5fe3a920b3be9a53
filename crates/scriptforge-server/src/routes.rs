//! Router and request handlers
//!
//! Three surfaces only: the health probe, the chat endpoint, and the static
//! fallback over the public directory. The router is generic over the
//! completion backend so tests can drive it with a scripted one.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use scriptforge_ai::{ChatRelay, ChatReply, CompletionBackend, OpenAiBackend};
use scriptforge_core::prelude::*;

use crate::config::ServerConfig;
use crate::pages;

/// Error body when no credential is configured
pub const NOT_CONFIGURED_MESSAGE: &str =
    "AI is not configured. Please set OPENAI_API_KEY on the server.";

/// Error body for any downstream failure
pub const REQUEST_FAILED_MESSAGE: &str = "AI request failed";

/// Shared request state
pub struct AppState<B> {
    /// Present only when a credential is configured
    pub relay: Option<ChatRelay<B>>,
}

/// Chat endpoint request body; absent fields read as empty
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// Bind and run the server until shutdown
pub async fn serve(config: ServerConfig) -> Result<()> {
    if pages::pages_missing(&config.public_dir) {
        let written = pages::bake_pages(&config.public_dir)?;
        info!("baked {} site pages", written.len());
    }

    let relay = match &config.api_key {
        Some(key) => Some(ChatRelay::new(OpenAiBackend::new(key.clone())?)),
        None => {
            warn!("OPENAI_API_KEY is not set. /api/chat will return an error.");
            None
        }
    };

    let state = Arc::new(AppState { relay });
    let router = build_router(state, &config.public_dir);

    info!("serving static files from: {}", config.public_dir.display());
    let listener = TcpListener::bind(config.addr()).await?;
    info!("server listening at http://localhost:{}", config.port);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

/// Build the router over `state`, serving static assets from `public_dir`
pub fn build_router<B>(state: Arc<AppState<B>>, public_dir: &Path) -> Router
where
    B: CompletionBackend + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat::<B>))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn chat<B>(
    State(state): State<Arc<AppState<B>>>,
    Json(request): Json<ChatRequest>,
) -> Response
where
    B: CompletionBackend + Send + Sync,
{
    let Some(relay) = state.relay.as_ref() else {
        return error_response(NOT_CONFIGURED_MESSAGE);
    };

    match relay.ask(&request.question, &request.code).await {
        ChatReply::Answer(answer) => Json(ChatAnswer { answer }).into_response(),
        ChatReply::Failed => error_response(REQUEST_FAILED_MESSAGE),
    }
}

fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body, body::Body, http::Request};
    use scriptforge_ai::test_utils::ScriptedBackend;
    use scriptforge_ai::{EMPTY_QUESTION_GUIDANCE, NO_ANSWER_FALLBACK};
    use tower::ServiceExt;

    fn test_router(backend: Option<ScriptedBackend>, public_dir: &Path) -> Router {
        let state = Arc::new(AppState {
            relay: backend.map(ChatRelay::new),
        });
        build_router(state, public_dir)
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::post("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(Some(ScriptedBackend::answering("x")), dir.path());
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_chat_without_credential_reports_not_configured() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(None, dir.path());
        let response = router
            .oneshot(chat_request(r#"{"question":"how?","code":"c"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": NOT_CONFIGURED_MESSAGE })
        );
    }

    #[tokio::test]
    async fn test_chat_relays_answer() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(Some(ScriptedBackend::answering("1. Do this.")), dir.path());
        let response = router
            .oneshot(chat_request(r#"{"question":"how?","code":"c"}"#))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(body_json(response).await, json!({ "answer": "1. Do this." }));
    }

    #[tokio::test]
    async fn test_chat_failure_maps_to_generic_error() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(Some(ScriptedBackend::failing()), dir.path());
        let response = router
            .oneshot(chat_request(r#"{"question":"how?","code":"c"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": REQUEST_FAILED_MESSAGE })
        );
    }

    #[tokio::test]
    async fn test_chat_empty_question_answers_guidance() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(Some(ScriptedBackend::answering("unused")), dir.path());
        let response = router
            .oneshot(chat_request(r#"{"question":"  ","code":"c"}"#))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            body_json(response).await,
            json!({ "answer": EMPTY_QUESTION_GUIDANCE })
        );
    }

    #[tokio::test]
    async fn test_chat_missing_fields_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(Some(ScriptedBackend::answering("unused")), dir.path());
        let response = router.oneshot(chat_request("{}")).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            body_json(response).await,
            json!({ "answer": EMPTY_QUESTION_GUIDANCE })
        );
    }

    #[tokio::test]
    async fn test_chat_missing_content_answers_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(Some(ScriptedBackend::missing_content()), dir.path());
        let response = router
            .oneshot(chat_request(r#"{"question":"how?","code":"c"}"#))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            body_json(response).await,
            json!({ "answer": NO_ANSWER_FALLBACK })
        );
    }

    #[tokio::test]
    async fn test_static_assets_are_served_from_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("styles.css"), "body { margin: 0; }").unwrap();
        let router = test_router(Some(ScriptedBackend::answering("x")), dir.path());
        let response = router
            .oneshot(Request::get("/styles.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_success());
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(Some(ScriptedBackend::answering("x")), dir.path());
        let response = router
            .oneshot(Request::get("/nope.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
