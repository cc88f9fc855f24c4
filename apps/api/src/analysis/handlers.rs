//! Axum route handler for the analyze endpoint.

use anyhow::{anyhow, Context};
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

use crate::analysis::extract::extract_text;
use crate::analysis::prompts::REVIEW_PROMPT;
use crate::errors::AppError;
use crate::llm_client::strip_json_fence;
use crate::state::AppState;

/// Name of the multipart field carrying the uploaded resume.
pub const RESUME_FIELD: &str = "resume";

/// POST /analyze
///
/// Takes one uploaded PDF, extracts its text, asks the LLM for structured
/// feedback, and forwards the parsed JSON unchanged. The reply shape is not
/// validated server-side — whatever valid JSON the model produced goes out.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let file = read_resume_field(multipart).await?.ok_or(AppError::MissingFile)?;

    let resume_text = extract_text(&file)?;
    debug!("Extracted {} chars of resume text", resume_text.len());

    let prompt = REVIEW_PROMPT.replace("{resume_text}", &resume_text);

    let raw = state
        .llm
        .generate(&prompt)
        .await
        .context("Generative API call failed")?;

    let sanitized = strip_json_fence(&raw);
    let feedback: Value =
        serde_json::from_str(sanitized).context("Model reply was not valid JSON")?;

    Ok(Json(feedback))
}

/// Walks the multipart body and returns the bytes of the `resume` field,
/// or `None` when no such field is present. Other fields are skipped.
async fn read_resume_field(mut multipart: Multipart) -> Result<Option<Bytes>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| anyhow!("Malformed multipart body: {e}"))?
    {
        if field.name() == Some(RESUME_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| anyhow!("Failed to read uploaded file: {e}"))?;
            return Ok(Some(bytes));
        }
    }
    Ok(None)
}
