//! `/api/backend/*` rewrite to the backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Requests under
//! `/api/backend/` are replayed against `API_BASE_URL` with the prefix
//! stripped, and the upstream response is streamed back unchanged apart from
//! hop-by-hop headers. The console's own session cookie never leaves this
//! server; other cookies are forwarded.

use axum::body::{Body, to_bytes};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::auth::COOKIE_NAME;
use crate::state::AppState;

/// Largest request body forwarded upstream.
const MAX_FORWARD_BODY_BYTES: usize = 10 * 1024 * 1024;

fn is_hop_by_hop(name: &HeaderName) -> bool {
    [
        header::CONNECTION,
        HeaderName::from_static("keep-alive"),
        header::PROXY_AUTHENTICATE,
        header::PROXY_AUTHORIZATION,
        header::TE,
        header::TRAILER,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
    ]
    .contains(name)
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API_BASE_URL is not configured")]
    NotConfigured,
    #[error("request body rejected: {0}")]
    Body(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Join `base`, the captured `path` and an optional query string.
///
/// Exactly one `/` separates base and path regardless of how either is
/// written; an empty query is dropped.
#[must_use]
pub fn rewrite_target(base: &str, path: &str, query: Option<&str>) -> String {
    let mut target = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    target
}

/// Copy end-to-end headers, dropping hop-by-hop ones and `Host`.
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if *name == header::HOST || *name == header::CONTENT_LENGTH || is_hop_by_hop(name) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Remove the `console_session` pair from a `Cookie` header value.
///
/// `None` when no other cookie remains or the value is not valid text.
pub(crate) fn strip_session_cookie(value: &HeaderValue) -> Option<HeaderValue> {
    let kept: Vec<&str> = value
        .to_str()
        .ok()?
        .split(';')
        .map(str::trim)
        .filter(|pair| {
            let name = pair.split_once('=').map_or(*pair, |(name, _)| name.trim());
            !pair.is_empty() && name != COOKIE_NAME
        })
        .collect();
    if kept.is_empty() {
        return None;
    }
    HeaderValue::from_str(&kept.join("; ")).ok()
}

/// Headers for the upstream request: end-to-end headers minus the session cookie.
pub(crate) fn upstream_request_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = forwardable_headers(headers);
    let cookies: Vec<HeaderValue> = out.get_all(header::COOKIE).iter().filter_map(strip_session_cookie).collect();
    out.remove(header::COOKIE);
    for cookie in cookies {
        out.append(header::COOKIE, cookie);
    }
    out
}

/// `ANY /api/backend/{*path}`: forward to `{API_BASE_URL}/{path}`.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    req: Request,
) -> Result<Response, ProxyError> {
    let base = state.config.api_base_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let (parts, body) = req.into_parts();
    let target = rewrite_target(base, &path, parts.uri.query());
    let body = to_bytes(body, MAX_FORWARD_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &target)
        .headers(upstream_request_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, %target, "backend rewrite failed"))?;

    tracing::debug!(method = %parts.method, %target, status = %upstream.status(), "backend rewrite");
    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut resp = Response::new(Body::from(bytes));
    *resp.status_mut() = status;
    *resp.headers_mut() = headers;
    Ok(resp)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
