//! HttpQaApi - REST implementation of the Q&A service contract.
//!
//! Talks JSON over HTTP to the endpoints `/chat`, `/feedback`,
//! `/admin/stats` and `/health` under a configurable base URL.

use async_trait::async_trait;
use blogqa_core::api::{ChatRequest, ChatResponse, FeedbackRequest, QaApi};
use blogqa_core::config::ClientConfig;
use blogqa_core::error::{BlogQaError, Result};
use blogqa_core::stats::{AdminStats, HealthStatus};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const CHAT_PATH: &str = "/chat";
const FEEDBACK_PATH: &str = "/feedback";
const ADMIN_STATS_PATH: &str = "/admin/stats";
const HEALTH_PATH: &str = "/health";

/// Client for the Q&A service HTTP API.
#[derive(Clone)]
pub struct HttpQaApi {
    client: Client,
    base_url: String,
}

impl HttpQaApi {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| map_transport_error(path, err))
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        self.client
            .get(url)
            .send()
            .await
            .map_err(|err| map_transport_error(path, err))
    }
}

#[async_trait]
impl QaApi for HttpQaApi {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let response = self.post_json(CHAT_PATH, &request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_detail_error(status, &body_text));
        }

        decode_json(CHAT_PATH, response).await
    }

    async fn send_feedback(&self, request: FeedbackRequest) -> Result<()> {
        let response = self.post_json(FEEDBACK_PATH, &request).await?;
        ensure_success(&response)?;
        Ok(())
    }

    async fn get_admin_stats(&self) -> Result<AdminStats> {
        let response = self.get(ADMIN_STATS_PATH).await?;
        ensure_success(&response)?;
        decode_json(ADMIN_STATS_PATH, response).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self.get(HEALTH_PATH).await?;
        ensure_success(&response)?;
        decode_json(HEALTH_PATH, response).await
    }
}

fn ensure_success(response: &Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        tracing::debug!(status = status.as_u16(), "Non-success response");
        Err(BlogQaError::http_status(status.as_u16()))
    }
}

async fn decode_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|err| BlogQaError::decode(format!("Failed to parse {path} response: {err}")))
}

fn map_transport_error(path: &str, err: reqwest::Error) -> BlogQaError {
    BlogQaError::transport(format!("{path} request failed: {err}"))
}

/// Builds a Request error from a non-success chat response.
///
/// Uses the JSON body's `detail` field when it holds usable text, otherwise
/// `HTTP <status>`.
fn map_detail_error(status: StatusCode, body: &str) -> BlogQaError {
    match extract_detail(body) {
        Some(detail) => BlogQaError::request(status.as_u16(), detail),
        None => BlogQaError::http_status(status.as_u16()),
    }
}

/// Pulls a human-readable message out of an error body.
///
/// `detail` may be a plain string or a validation list of `{msg}` objects.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;

    let text = match detail {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => other.get("msg").and_then(Value::as_str).map(str::to_string),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => return None,
        other => other.to_string(),
    };

    if text.trim().is_empty() { None } else { Some(text) }
}
