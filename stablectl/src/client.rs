//! Thin HTTP client for `/api/horses`.
//!
//! Identity is sent the same way a browser client would: either mock headers
//! (`x-org-id` / `x-user-id` / `x-role`) or a bearer token, never both.

use anyhow::{Context, Result, bail};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub org_id: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<String>,
    pub token: Option<String>,
}

pub struct HorseClient {
    http: reqwest::Client,
    base_url: String,
    identity: Identity,
}

/// Non-2xx answer, with the server's `{ error: { code, message } }` body when present.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: Option<String>,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} {}: {}", self.status.as_u16(), code, self.message),
            None => write!(f, "{}: {}", self.status.as_u16(), self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl HorseClient {
    pub fn new(base_url: &str, identity: Identity) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("stablectl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            identity,
        })
    }

    pub async fn list(&self) -> Result<Value> {
        self.send(Method::GET, "/api/horses", None).await
    }

    pub async fn get(&self, id: &str) -> Result<Value> {
        self.send(Method::GET, &format!("/api/horses/{id}"), None).await
    }

    pub async fn create(&self, body: Value) -> Result<Value> {
        self.send(Method::POST, "/api/horses", Some(body)).await
    }

    pub async fn update(&self, id: &str, body: Value) -> Result<Value> {
        self.send(Method::PATCH, &format!("/api/horses/{id}"), Some(body))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.send(Method::DELETE, &format!("/api/horses/{id}"), None)
            .await
    }

    fn with_identity(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.identity.token {
            return req.bearer_auth(token);
        }
        if let Some(org) = &self.identity.org_id {
            req = req.header("x-org-id", org);
        }
        if let Some(user) = &self.identity.user_id {
            req = req.header("x-user-id", user);
        }
        if let Some(role) = &self.identity.role {
            req = req.header("x-role", role);
        }
        req
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.with_identity(self.http.request(method.clone(), &url));
        if let Some(body) = body {
            req = req.json(&body);
        }

        let res = req
            .send()
            .await
            .with_context(|| format!("{method} {url} failed"))?;
        let status = res.status();
        let text = res.text().await.context("failed to read response body")?;

        let value: Value = if text.is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(_) if !status.is_success() => Value::String(text),
                Err(e) => bail!("server returned non-JSON body: {e}"),
            }
        };

        if !status.is_success() {
            return Err(api_error(status, &value).into());
        }

        Ok(value)
    }
}

fn api_error(status: StatusCode, body: &Value) -> ApiError {
    let error = &body["error"];
    let message = error["message"]
        .as_str()
        .or_else(|| body.as_str())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"))
        .to_string();

    ApiError {
        status,
        code: error["code"].as_str().map(str::to_string),
        message,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn api_error_uses_the_error_envelope() {
        let err = api_error(
            StatusCode::FORBIDDEN,
            &json!({"error": {"code": "FORBIDDEN", "message": "You do not have access to this horse"}}),
        );
        assert_eq!(err.code.as_deref(), Some("FORBIDDEN"));
        assert_eq!(
            err.to_string(),
            "403 FORBIDDEN: You do not have access to this horse"
        );
    }

    #[test]
    fn api_error_falls_back_to_reason_phrase() {
        let err = api_error(StatusCode::BAD_GATEWAY, &Value::Null);
        assert_eq!(err.code, None);
        assert_eq!(err.message, "Bad Gateway");
    }
}
