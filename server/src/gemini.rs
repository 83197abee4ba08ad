//! Gemini upstream client — forwards a prompt to the generation backend.
//!
//! DESIGN
//! ======
//! Thin HTTP wrapper around the external generation service, which accepts
//! `{"message": ...}` and answers with an optional `response` string. Pure
//! parsing in `parse_response` for testability.
//!
//! The upstream HTTP status is deliberately not consulted: any body that
//! parses as JSON is a success from the relay's point of view, and an
//! error-shaped body simply carries no `response` field, which the client
//! surfaces as its fallback reply. Only transport and body-parse failures
//! are errors.

#[cfg(test)]
#[path = "gemini_test.rs"]
mod gemini_test;

pub const DEFAULT_GENERATE_URL: &str = "http://localhost:5000/generate";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by upstream generation calls.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the generation service failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The generation service response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Capability to turn a prompt into an optional reply string.
///
/// Implemented by [`GeminiClient`] in production and by scripted mocks in
/// route tests.
#[async_trait::async_trait]
pub trait Generate: Send + Sync {
    /// Forward `message` to the generation backend.
    ///
    /// `Ok(None)` means the backend answered without a reply text.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError`] on transport or body-parse failure.
    async fn generate(&self, message: &str) -> Result<Option<String>, GeminiError>;
}

// =============================================================================
// CLIENT
// =============================================================================

/// reqwest-based client for the external generation service.
pub struct GeminiClient {
    http: reqwest::Client,
    generate_url: String,
}

impl GeminiClient {
    /// Build a client from environment variables.
    ///
    /// - `GENERATE_URL`: upstream address, default
    ///   `http://localhost:5000/generate`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, GeminiError> {
        let generate_url = std::env::var("GENERATE_URL").unwrap_or_else(|_| DEFAULT_GENERATE_URL.to_owned());
        Self::new(generate_url)
    }

    /// Build a client targeting `generate_url`.
    ///
    /// No timeout or retry policy is applied: a relay call maps one-to-one
    /// onto a single upstream request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(generate_url: String) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GeminiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, generate_url })
    }

    /// The configured upstream address.
    #[must_use]
    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }
}

#[async_trait::async_trait]
impl Generate for GeminiClient {
    async fn generate(&self, message: &str) -> Result<Option<String>, GeminiError> {
        let body = GenerateRequest { message };

        let response = self
            .http
            .post(&self.generate_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::ApiRequest(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::ApiRequest(e.to_string()))?;

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct GenerateRequest<'a> {
    message: &'a str,
}

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<Option<String>, GeminiError> {
    let api: GenerateResponse = serde_json::from_str(json).map_err(|e| GeminiError::ApiParse(e.to_string()))?;
    Ok(api.response)
}
