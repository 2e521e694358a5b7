//! HTTP client for the chat backend.
//!
//! `POST {backend}/chat/{document_id}` with `{"message": ...}`. A successful
//! response carries `{"reply": ...}`, a failed one `{"error": ...}`.

use crate::error::{ChatError, INVALID_RESPONSE, NOT_OK_FALLBACK};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Both fields are loosely typed; anything but a non-empty string counts as
/// absent.
#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: reqwest::Url,
}

impl ChatClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ChatError> {
        let base_url = reqwest::Url::parse(base_url).map_err(|err| {
            ChatError::NetworkFailure(format!("invalid backend URL {base_url}: {err}"))
        })?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: reqwest::Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Endpoint for `document_id`, which is pushed as an encoded path segment.
    pub fn endpoint(&self, document_id: &str) -> Result<reqwest::Url, ChatError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ChatError::NetworkFailure(format!(
                    "backend URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("chat")
            .push(document_id);
        Ok(url)
    }

    pub async fn send(&self, document_id: &str, message: &str) -> Result<String, ChatError> {
        let url = self.endpoint(document_id)?;
        debug!(%url, "Posting chat message");
        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&ChatRequest { message })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "Chat backend responded");
        interpret_response(status.is_success(), &body)
    }
}

/// Map a response status and body onto a reply or a chat error.
pub fn interpret_response(ok: bool, body: &str) -> Result<String, ChatError> {
    let parsed = serde_json::from_str::<ChatResponse>(body);

    if !ok {
        let message = parsed
            .ok()
            .and_then(|response| non_empty_string(response.error))
            .unwrap_or_else(|| NOT_OK_FALLBACK.to_string());
        return Err(ChatError::ServerError(message));
    }

    let response =
        parsed.map_err(|_| ChatError::MalformedResponse(INVALID_RESPONSE.to_string()))?;
    if let Some(reply) = non_empty_string(response.reply) {
        return Ok(reply);
    }
    if let Some(error) = non_empty_string(response.error) {
        return Err(ChatError::ServerError(error));
    }
    Err(ChatError::MalformedResponse(INVALID_RESPONSE.to_string()))
}

fn non_empty_string(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}
