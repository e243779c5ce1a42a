//! Auth routes: credential login, session lookup, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{Session, SessionUser};
use serde::Deserialize;
use time::Duration;

use crate::services::backend::{self, LoginError};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "console_session";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn login_error_status(err: &LoginError) -> StatusCode {
    match err {
        LoginError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        LoginError::Rejected => StatusCode::UNAUTHORIZED,
        LoginError::Unreachable(_) | LoginError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Signed-in user resolved from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = app_state.sessions.get(token).await.ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

/// `POST /api/auth/login`: verify with the backend, create a session, set cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let username = body.username.trim();
    if username.is_empty() || body.password.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "username and password required").into_response();
    }

    let user =
        match backend::verify_credentials(&state.http, state.config.api_base_url.as_deref(), username, &body.password)
            .await
        {
            Ok(user) => user,
            Err(e) => {
                let status = login_error_status(&e);
                if status == StatusCode::UNAUTHORIZED {
                    tracing::info!(%username, "login rejected");
                } else {
                    tracing::error!(error = %e, "login check failed");
                }
                return status.into_response();
            }
        };

    tracing::info!(user_id = %user.id, "session created");
    let token = state.sessions.create(user).await;
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT).into_response()
}

/// `GET /api/auth/session`: return the current session or 401.
pub async fn session(auth: AuthUser) -> Json<Session> {
    Json(Session { user: auth.user })
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    state.sessions.remove(&auth.token).await;
    let jar = CookieJar::new().add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
