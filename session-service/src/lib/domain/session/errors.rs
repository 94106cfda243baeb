use auth::PasswordError;
use thiserror::Error;

use crate::domain::token::errors::TokenError;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for user repository operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for authentication operations.
///
/// Unknown username and wrong password both collapse into
/// `InvalidCredentials` before leaving the service, so callers cannot
/// enumerate usernames. Infrastructure faults (`Password` internals,
/// `Repository`, `Token(Store)`) propagate as themselves and must never be
/// reported as "not authenticated".
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Password error: {0}")]
    Password(PasswordError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
