use super::{Verification, VerificationCheck, VerificationProvider};
use crate::config::SendlyConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct SendVerificationRequest<'a> {
    to: &'a str,
}

#[derive(Debug, Serialize)]
struct CheckVerificationRequest<'a> {
    code: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerificationBody {
    #[serde(default)]
    id: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the Sendly Verify API.
#[derive(Clone)]
pub struct SendlyClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl SendlyClient {
    pub fn new(config: &SendlyConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::ConfigError(format!("invalid Sendly base URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::ConfigError(format!(
                "invalid Sendly base URL {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("sendly-otp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    ///
    /// `.` and `..` are rejected: the URL parser would resolve them as dot
    /// segments and the request would land on a different endpoint.
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        if segments.iter().any(|s| matches!(*s, "." | "..")) {
            return Err(AppError::ValidationError("Invalid verification ID".to_string()));
        }
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn post<B: Serialize>(&self, url: Url, body: &B) -> AppResult<VerificationBody> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&error_text)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(AppError::ExternalApiError(format!(
            "Sendly API returned HTTP {}: {}",
            status.as_u16(),
            message
        )))
    }
}

/// Pulls a readable message out of an error body, preferring the JSON
/// `message` field, then `error`, then the raw text.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return Some(message);
        }
        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return Some(error);
        }
    }
    Some(body.to_string())
}

#[async_trait]
impl VerificationProvider for SendlyClient {
    async fn send(&self, phone: &str) -> AppResult<Verification> {
        let url = self.endpoint(&["verify"])?;
        match self.post(url, &SendVerificationRequest { to: phone }).await {
            Ok(body) => {
                log::info!(
                    "Verification sent: {}, id: {}, status: {}",
                    phone,
                    body.id,
                    body.status
                );
                Ok(Verification { id: body.id })
            }
            Err(e) => {
                log::error!("Verification failed to send: {}, Error: {}", phone, e);
                Err(e)
            }
        }
    }

    async fn check(&self, verification_id: &str, code: &str) -> AppResult<VerificationCheck> {
        let url = self.endpoint(&["verify", verification_id, "check"])?;
        match self.post(url, &CheckVerificationRequest { code }).await {
            Ok(body) => {
                log::info!("Verification {} checked: {}", verification_id, body.status);
                Ok(VerificationCheck {
                    status: body.status,
                })
            }
            Err(e) => {
                log::error!("Verification {} check failed: {}", verification_id, e);
                Err(e)
            }
        }
    }
}
