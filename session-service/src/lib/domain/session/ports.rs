use async_trait::async_trait;

use auth::Claims;

use crate::domain::session::errors::AuthError;
use crate::domain::session::errors::RepositoryError;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::TokenPair;
use crate::domain::session::models::User;
use crate::domain::session::models::UserId;
use crate::domain::session::models::Username;

/// Read-only access to the externally-owned user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve a user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, RepositoryError>;

    /// Retrieve a user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
}

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate credentials and issue a fresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (never
    ///   distinguished)
    /// * `Token` - Issuing or persisting the new tokens failed
    /// * `Repository` - User lookup failed
    async fn login(&self, credentials: Credentials) -> Result<(User, TokenPair), AuthError>;

    /// Revoke the active sessions for a subject.
    ///
    /// Revokes by subject id; the presented token is not required to still
    /// verify. Idempotent for subjects with no active session.
    ///
    /// # Errors
    /// * `Token` - Store unreachable; surfaced so callers can retry
    async fn logout(&self, subject: UserId) -> Result<(), AuthError>;

    /// Validate a raw access token, returning its claims.
    ///
    /// # Errors
    /// * `Token` - Signature, expiry, or active-session check failed
    async fn validate(&self, token: &str) -> Result<Claims, AuthError>;

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// Rotates both classes; the presented refresh token is superseded.
    ///
    /// # Errors
    /// * `InvalidCredentials` - The subject no longer exists
    /// * `Token` - Refresh token invalid, revoked, or rotation failed
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
}
