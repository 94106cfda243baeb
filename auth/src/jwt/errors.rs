use thiserror::Error;

/// Error type for session token operations.
///
/// Verification failures are split into distinct variants so callers can
/// log the precise cause while presenting a uniform "unauthorized" to end
/// users.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token signed with unexpected algorithm")]
    UnexpectedAlgorithm,

    #[error("Token is expired")]
    Expired,

    #[error("Invalid token claims: {0}")]
    InvalidClaims(String),
}
