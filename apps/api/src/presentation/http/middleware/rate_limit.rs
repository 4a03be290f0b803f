use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header::HeaderName},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::SecondsFormat;

use crate::infrastructure::security::rate_limiter::RateLimitDecision;
use crate::presentation::http::{errors::AppError, state::AppState};

fn extract_client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("unknown")
        .to_string()
}

fn apply_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
    let values = [
        ("x-ratelimit-limit", decision.limit.to_string()),
        ("x-ratelimit-remaining", decision.remaining.to_string()),
        ("x-ratelimit-reset", decision.reset_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    ];
    for (name, value) in values {
        if let Ok(v) = HeaderValue::from_str(&value) {
            headers.insert(HeaderName::from_static(name), v);
        }
    }
}

/// Fixed-window limit per client IP and path. Mounted on the `/threads` routes.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let ip = extract_client_ip(request.headers());
    let key = format!("{}:{}", ip, request.uri().path());

    let Some(decision) = state.rate_limiter.check(&key).await else {
        return next.run(request).await;
    };

    if !decision.allowed {
        let mut response = AppError::RateLimited(format!(
            "Rate limit exceeded. Too many requests to /threads endpoints. Please try again in {} seconds.",
            decision.reset_after_seconds
        ))
        .into_response();
        apply_headers(response.headers_mut(), &decision);
        return response;
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), &decision);
    response
}
