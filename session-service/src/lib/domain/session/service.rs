use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::PasswordError;
use auth::PasswordHasher;

use crate::domain::session::errors::AuthError;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::TokenPair;
use crate::domain::session::models::User;
use crate::domain::session::models::UserId;
use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::UserRepository;
use crate::domain::token::ports::TokenStore;
use crate::domain::token::service::TokenService;

/// Authentication service.
///
/// Orchestrates the user repository, password hasher, and the two token
/// lifecycles. Access and refresh tokens are separate classes with their own
/// store namespaces and lifetimes, so the one-active-token-per-subject rule
/// holds independently for each.
pub struct AuthService<R, S>
where
    R: UserRepository,
    S: TokenStore,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    access_tokens: TokenService<S>,
    refresh_tokens: TokenService<S>,
}

impl<R, S> AuthService<R, S>
where
    R: UserRepository,
    S: TokenStore,
{
    pub fn new(
        repository: Arc<R>,
        access_tokens: TokenService<S>,
        refresh_tokens: TokenService<S>,
    ) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            access_tokens,
            refresh_tokens,
        }
    }

    async fn issue_pair(&self, subject: u64) -> Result<TokenPair, AuthError> {
        let access_token = self.access_tokens.create(subject).await?;
        let refresh_token = self.refresh_tokens.create(subject).await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl<R, S> AuthServicePort for AuthService<R, S>
where
    R: UserRepository,
    S: TokenStore,
{
    async fn login(&self, credentials: Credentials) -> Result<(User, TokenPair), AuthError> {
        let user = self
            .repository
            .find_by_username(&credentials.username)
            .await?
            .ok_or_else(|| {
                // Folded into the same error as a wrong password so the
                // response cannot be used to enumerate usernames
                tracing::debug!(username = %credentials.username, "Login for unknown username");
                AuthError::InvalidCredentials
            })?;

        match self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
        {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => {
                tracing::warn!(user_id = %user.id, "Login with wrong password");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(AuthError::Password(e)),
        }

        let pair = self.issue_pair(user.id.0).await?;

        tracing::info!(user_id = %user.id, "Session created");
        Ok((user, pair))
    }

    async fn logout(&self, subject: UserId) -> Result<(), AuthError> {
        // Both revocations are attempted even if the first fails; the first
        // error is surfaced so the caller can retry
        let access = self.access_tokens.revoke(subject.0).await;
        let refresh = self.refresh_tokens.revoke(subject.0).await;

        access?;
        refresh?;

        tracing::info!(user_id = %subject, "Session revoked");
        Ok(())
    }

    async fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.access_tokens.validate(token).await?)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.refresh_tokens.validate(refresh_token).await?;

        // The subject may have been deleted since the refresh token was
        // issued; a renewed session must not outlive the account
        let subject = UserId(claims.sub);
        self.repository
            .find_by_id(subject)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let pair = self.issue_pair(claims.sub).await?;

        tracing::info!(user_id = %subject, "Session renewed");
        Ok(pair)
    }
}
