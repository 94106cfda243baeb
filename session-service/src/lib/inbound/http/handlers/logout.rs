use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::ports::AuthServicePort;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

/// Revoke the caller's active sessions.
///
/// The subject comes from the middleware-authenticated request context, so
/// revocation works even if the access token the client holds elsewhere has
/// already been superseded.
pub async fn logout(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedSubject>,
) -> Result<ApiSuccess<LogoutResponseData>, ApiError> {
    state.auth_service.logout(authenticated.subject).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LogoutResponseData {
            message: "Logged out".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
