use thiserror::Error;

/// Error type for password operations.
///
/// `Mismatch` is its own variant rather than a stringly-typed failure so
/// callers can structurally distinguish "wrong password" from an internal
/// hashing fault.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    InvalidHash(String),

    #[error("Password does not match")]
    Mismatch,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
