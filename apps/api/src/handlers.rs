//! Axum route handlers for the analysis API.

use std::path::Path;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::AnalysisRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub file_path: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    /// Optional analysis record to ground the answer in. Callers usually
    /// pass back the record returned by `POST /analyze`.
    pub context: Option<AnalysisRecord>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /analyze
///
/// Runs the full pipeline against a local resume file and returns the
/// complete analysis record. All-or-nothing: any failing step fails the
/// request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisRecord>, AppError> {
    if request.file_path.trim().is_empty() {
        return Err(AppError::Validation("file_path cannot be empty".to_string()));
    }

    let record = state
        .analyzer
        .analyze_file(Path::new(&request.file_path))
        .await?;

    Ok(Json(record))
}

/// POST /chat
///
/// One chat turn, optionally grounded in a previously returned analysis.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let response = state
        .analyzer
        .chat(&request.prompt, request.context.as_ref())
        .await?;

    Ok(Json(ChatResponse { response }))
}
