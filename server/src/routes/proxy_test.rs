use super::*;

use axum::http::HeaderValue;

#[test]
fn rewrite_target_joins_with_single_slash() {
    assert_eq!(rewrite_target("http://api:9000", "clusters", None), "http://api:9000/clusters");
    assert_eq!(rewrite_target("http://api:9000/", "/clusters", None), "http://api:9000/clusters");
    assert_eq!(rewrite_target("http://api:9000/v1", "projects/p-1/catalogs", None), "http://api:9000/v1/projects/p-1/catalogs");
}

#[test]
fn rewrite_target_appends_query() {
    assert_eq!(
        rewrite_target("http://api:9000", "dns", Some("cluster=c-1&page=2")),
        "http://api:9000/dns?cluster=c-1&page=2"
    );
}

#[test]
fn rewrite_target_drops_empty_query() {
    assert_eq!(rewrite_target("http://api:9000", "licenses", Some("")), "http://api:9000/licenses");
}

#[test]
fn forwardable_headers_strips_host_length_and_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("console.local"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("5"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::COOKIE, HeaderValue::from_static("console_session=abc"));
    headers.append("x-multi", HeaderValue::from_static("a"));
    headers.append("x-multi", HeaderValue::from_static("b"));

    let out = forwardable_headers(&headers);
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::CONTENT_LENGTH).is_none());
    assert!(out.get(header::CONNECTION).is_none());
    assert!(out.get(header::TRANSFER_ENCODING).is_none());
    assert!(out.get("keep-alive").is_none());
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(out.get(header::COOKIE).unwrap(), "console_session=abc");
    assert_eq!(out.get_all("x-multi").iter().count(), 2);
}

#[test]
fn strip_session_cookie_keeps_other_pairs() {
    let value = HeaderValue::from_static("theme=dark; console_session=abc123;locale=ko");
    assert_eq!(strip_session_cookie(&value).unwrap(), "theme=dark; locale=ko");
}

#[test]
fn strip_session_cookie_drops_header_left_empty() {
    assert!(strip_session_cookie(&HeaderValue::from_static("console_session=abc123")).is_none());
    assert!(strip_session_cookie(&HeaderValue::from_static(" ; console_session=x ;")).is_none());
}

#[test]
fn strip_session_cookie_matches_whole_name_only() {
    let value = HeaderValue::from_static("console_session_hint=1; xconsole_session=2");
    assert_eq!(strip_session_cookie(&value).unwrap(), "console_session_hint=1; xconsole_session=2");
}

#[test]
fn upstream_request_headers_never_carry_session_token() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("console.local"));
    headers.append(header::COOKIE, HeaderValue::from_static("console_session=abc123"));
    headers.append(header::COOKIE, HeaderValue::from_static("theme=dark; console_session=abc123"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let out = upstream_request_headers(&headers);
    let cookies: Vec<_> = out.get_all(header::COOKIE).iter().collect();
    assert_eq!(cookies, vec!["theme=dark"]);
    assert!(out.get(header::HOST).is_none());
    assert_eq!(out.get(header::ACCEPT).unwrap(), "application/json");
}

#[test]
fn proxy_error_status_codes() {
    assert_eq!(ProxyError::NotConfigured.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::Body("too big".to_owned()).into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}
