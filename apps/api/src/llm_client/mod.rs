/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language API
/// directly. All LLM interactions MUST go through this module.
///
/// Model: gemini-2.0-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned no candidates")]
    EmptyCandidates,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ReplyContent,
}

#[derive(Debug, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: String,
}

/// The single Gemini client shared by all handlers.
/// Wraps the `generateContent` endpoint; the API key travels as a query
/// parameter, per the generative-language API contract.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// `base_url` is the API root up to and including `/v1beta`.
    ///
    /// The underlying HTTP client carries no timeout: a hung upstream holds
    /// the request open until the upstream gives up or the caller goes away.
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Makes one `generateContent` call with the prompt as the sole content
    /// part and returns the reply text at `candidates[0].content.parts[0]`.
    /// No retries.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, MODEL);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateResponse = response.json().await?;

        debug!("LLM call succeeded: candidates={}", reply.candidates.len());

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(LlmError::EmptyCandidates)
    }
}

/// Strips exactly a leading "```json" marker and a trailing "```" from LLM
/// output, plus a simple trim.
///
/// Deliberately narrow: a plain "```" fence without the json tag, or any
/// other wrapping variant, is left untouched. Idempotent — stripped text
/// never starts with "```json" again.
pub fn strip_json_fence(text: &str) -> &str {
    let text = text.trim();
    if let Some(inner) = text.strip_prefix("```json") {
        inner.strip_suffix("```").unwrap_or(inner).trim()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fence(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fence_no_fence() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fence(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fence_plain_fence_untouched() {
        // Only the "```json" tag is recognized.
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fence(input), input);
    }

    #[test]
    fn test_strip_json_fence_unterminated() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_json_fence(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fence_idempotent() {
        let input = "```json\n{\"score\": 80}\n```";
        let once = strip_json_fence(input);
        assert_eq!(strip_json_fence(once), once);
    }

    #[test]
    fn test_strip_json_fence_surrounding_whitespace() {
        let input = "  \n```json\n{\"score\": 80}\n```\n  ";
        assert_eq!(strip_json_fence(input), "{\"score\": 80}");
    }
}
