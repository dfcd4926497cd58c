//! REST API routes for the glossary service.
//!
//! - POST /generate_glossary      - Build the prompt, call the LLM, return text
//! - POST /download_glossary_docx - Convert glossary text into a .docx attachment
//! - GET  /health                 - Health check

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::export;
use crate::llm::LlmClient;
use crate::prompt;

// Application state
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

// API types
#[derive(Debug, Deserialize)]
pub struct GlossaryRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_language_level")]
    pub language_level: String,
}

fn default_language_level() -> String {
    "B1-B2".to_string()
}

#[derive(Debug, Serialize)]
pub struct GlossaryResponse {
    pub glossary: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub glossary: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/generate_glossary", post(generate_glossary))
        .route("/download_glossary_docx", post(download_glossary_docx))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// Generate glossary text for a topic at the requested proficiency level
pub async fn generate_glossary(
    State(state): State<AppState>,
    Json(request): Json<GlossaryRequest>,
) -> Result<Json<GlossaryResponse>, ServiceError> {
    let user_prompt = prompt::build_glossary_prompt(&request.topic, &request.language_level);

    info!(
        provider = state.llm.provider_name(),
        model = state.llm.model_name(),
        topic = %request.topic,
        level = %request.language_level,
        "generating glossary"
    );

    match state.llm.chat(prompt::SYSTEM_PROMPT, &user_prompt).await {
        Ok(glossary) => Ok(Json(GlossaryResponse { glossary })),
        Err(e) => {
            warn!("glossary generation failed: {:#}", e);
            Err(ServiceError::Upstream(e.to_string()))
        }
    }
}

// Convert glossary text into a downloadable .docx attachment
pub async fn download_glossary_docx(
    Json(request): Json<ExportRequest>,
) -> Result<(HeaderMap, Vec<u8>), ServiceError> {
    if request.glossary.is_empty() {
        return Err(ServiceError::EmptyGlossary);
    }

    // Pack into a per-request temp file; it is removed when `temp` drops.
    let mut temp =
        tempfile::NamedTempFile::new().map_err(|e| ServiceError::Export(e.to_string()))?;
    export::write_document(&request.glossary, temp.as_file_mut())
        .map_err(|e| ServiceError::Export(e.to_string()))?;

    let bytes = std::fs::read(temp.path()).map_err(|e| ServiceError::Export(e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
    );
    let disposition = format!("attachment; filename=\"{}\"", export::ATTACHMENT_NAME);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|e| ServiceError::Export(e.to_string()))?,
    );

    Ok((headers, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glossary_request_defaults() {
        let request: GlossaryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.topic, "");
        assert_eq!(request.language_level, "B1-B2");
    }

    #[test]
    fn glossary_request_explicit_fields() {
        let request: GlossaryRequest =
            serde_json::from_str(r#"{"topic": "Algorithms", "language_level": "A2"}"#).unwrap();
        assert_eq!(request.topic, "Algorithms");
        assert_eq!(request.language_level, "A2");
    }
}
