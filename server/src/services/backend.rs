//! Credential checks against the backend API.
//!
//! The console does not speak any identity-provider protocol itself. It
//! forwards the login form to `{API_BASE_URL}/auth/login` and trusts the
//! backend's verdict.

use client::net::types::SessionUser;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("API_BASE_URL is not configured")]
    NotConfigured,
    #[error("credentials rejected")]
    Rejected,
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("unexpected backend response: {0}")]
    Upstream(String),
}

/// Fields the backend may return on a successful login.
#[derive(Debug, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Ask the backend whether `username`/`password` are valid.
pub async fn verify_credentials(
    http: &reqwest::Client,
    api_base_url: Option<&str>,
    username: &str,
    password: &str,
) -> Result<SessionUser, LoginError> {
    let base = api_base_url.ok_or(LoginError::NotConfigured)?;
    let resp = http
        .post(format!("{base}/auth/login"))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await
        .map_err(|e| LoginError::Unreachable(e.to_string()))?;

    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(LoginError::Rejected);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(LoginError::Upstream(format!("{status}: {body}")));
    }

    // An empty or non-JSON success body still counts as accepted.
    let body = resp.text().await.map_err(|e| LoginError::Upstream(e.to_string()))?;
    let parsed: LoginResponse = serde_json::from_str(&body).unwrap_or_default();
    Ok(session_user_from(parsed, username))
}

fn session_user_from(resp: LoginResponse, username: &str) -> SessionUser {
    SessionUser {
        id: resp.id.unwrap_or_else(|| username.to_owned()),
        name: resp.name.unwrap_or_else(|| username.to_owned()),
        email: resp.email,
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
