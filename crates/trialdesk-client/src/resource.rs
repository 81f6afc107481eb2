use serde_json::Value;

use crate::error::ApiError;

/// Header carrying the anti-forgery token on mutating calls.
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// HTTP verbs the resource layer issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Mutating verbs carry the anti-forgery header and must not be
    /// retried.
    pub const fn is_mutating(self) -> bool {
        !matches!(self, Self::Get)
    }

    fn method(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// JSON resource client for one API origin.
///
/// Owns the connection pool and the session's anti-forgery token. Every
/// call is asynchronous and resolves exactly once; nothing is retried.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: reqwest::Client,
    base_url: String,
    csrf_token: String,
}

impl ResourceClient {
    pub fn new(base_url: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: csrf_token.into(),
        }
    }

    /// Issue one request and classify the response.
    ///
    /// 2xx resolves with the parsed JSON payload (`Value::Null` for an
    /// empty body); everything else is folded into [`ApiError`].
    pub async fn send(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?verb, "sending request");

        let mut request = self.http.request(verb.method(), &url);
        if verb.is_mutating() {
            request = request.header(CSRF_HEADER, &self.csrf_token);
        }
        if let Some(body) = body {
            // .json() also sets Content-Type: application/json
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::classify(status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Verb::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Verb::Post, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Verb::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Verb::Delete, path, None).await
    }
}
