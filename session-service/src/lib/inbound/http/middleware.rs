use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use auth::Claims;

use crate::domain::session::errors::AuthError;
use crate::domain::session::models::UserId;
use crate::domain::session::ports::AuthServicePort;
use crate::domain::token::errors::TokenError;
use crate::inbound::http::router::AppState;

/// Cookie carrying the access token when no Authorization header is sent
const AUTH_COOKIE: &str = "auth_token";

/// Extension type to store the authenticated subject in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject {
    pub subject: UserId,
    pub claims: Claims,
}

/// Middleware that validates bearer tokens and adds the subject to request
/// extensions.
///
/// The token may arrive in the `Authorization: Bearer <value>` header or in
/// the `auth_token` cookie; the header takes precedence when both are
/// present.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(&req)?.to_string();

    let claims = state.auth_service.validate(&token).await.map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        match e {
            // Transient store faults must not masquerade as bad credentials
            AuthError::Token(ref token_err @ TokenError::Store(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": token_err.to_string()
                })),
            )
                .into_response(),
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Invalid or expired token"
                })),
            )
                .into_response(),
        }
    })?;

    req.extensions_mut().insert(AuthenticatedSubject {
        subject: UserId(claims.sub),
        claims,
    });

    Ok(next.run(req).await)
}

fn extract_token(req: &Request) -> Result<&str, Response> {
    if let Some(auth_header) = req.headers().get(http::header::AUTHORIZATION) {
        let auth_str = auth_header.to_str().map_err(|_| {
            unauthorized_response("Invalid Authorization header")
        })?;

        if !auth_str.starts_with("Bearer ") {
            return Err(unauthorized_response(
                "Invalid Authorization header format. Expected: Bearer <token>",
            ));
        }

        return Ok(auth_str.trim_start_matches("Bearer "));
    }

    if let Some(token) = extract_token_from_cookie(req) {
        return Ok(token);
    }

    Err(unauthorized_response("Missing bearer token"))
}

fn extract_token_from_cookie(req: &Request) -> Option<&str> {
    let cookies = req.headers().get(http::header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == AUTH_COOKIE).then_some(value)
    })
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
