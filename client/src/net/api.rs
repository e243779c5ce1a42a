//! REST API helpers for communicating with the console server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and
//! config fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;
use crate::config::RuntimeConfig;

/// Fetch the current session from `/api/auth/session`.
/// Returns `None` if not authenticated, on failure, or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the public runtime configuration from `/api/runtime-config`.
pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/runtime-config")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with `POST /api/auth/login`. The server sets the session cookie.
///
/// # Errors
///
/// Returns a user-facing message if the request fails or is rejected.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        Err(login_failure_message(resp.status()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Map a login response status to the message shown under the form.
#[must_use]
pub fn login_failure_message(status: u16) -> String {
    match status {
        400 => "Enter both username and password.".to_owned(),
        401 | 403 => "Invalid username or password.".to_owned(),
        503 => "Sign-in is not configured on this server.".to_owned(),
        other => format!("Sign-in failed ({other})."),
    }
}
