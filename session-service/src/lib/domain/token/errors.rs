use thiserror::Error;

/// Error for token store operations.
#[derive(Debug, Clone, Error)]
pub enum TokenStoreError {
    #[error("No active token for subject {0}")]
    NotFound(u64),

    #[error("Token store unavailable: {0}")]
    Backend(String),
}

/// Top-level error for token lifecycle operations.
///
/// `Mismatch` and `NotActive` are the revocation-enforcement outcomes: the
/// presented value verified cryptographically but the store no longer backs
/// it. They must stay distinct from signature failures so operators can tell
/// a superseded session from a forged token.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    Invalid(#[from] auth::JwtError),

    #[error("No active token for subject {0}")]
    NotActive(u64),

    #[error("Token does not match the active token for its subject")]
    Mismatch,

    #[error("Token store error: {0}")]
    Store(TokenStoreError),
}

impl TokenError {
    /// True for failures that mean "this caller is not authenticated",
    /// false for transient infrastructure faults that must not be reported
    /// as unauthorized.
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, TokenError::Store(_))
    }
}
