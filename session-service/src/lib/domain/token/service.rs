use std::sync::Arc;

use auth::Claims;
use auth::JwtHandler;

use crate::domain::token::errors::TokenError;
use crate::domain::token::errors::TokenStoreError;
use crate::domain::token::models::Token;
use crate::domain::token::ports::TokenStore;

/// Token lifecycle service.
///
/// Coordinates the stateless signer with the stateful store so that a token
/// is usable only while it is the one the store holds for its subject. The
/// signature proves authenticity; the store decides which signed value is
/// authoritative, which is what makes logout and rotation actually
/// invalidate otherwise self-verifying tokens.
pub struct TokenService<S>
where
    S: TokenStore,
{
    handler: Arc<JwtHandler>,
    store: Arc<S>,
}

impl<S> TokenService<S>
where
    S: TokenStore,
{
    pub fn new(handler: Arc<JwtHandler>, store: Arc<S>) -> Self {
        Self { handler, store }
    }

    /// Issue a new token for `subject`, superseding any active one.
    ///
    /// Rotation order: delete the existing entry, sign, then save. The
    /// read-delete-write sequence is not atomic across the three steps; two
    /// concurrent creates for the same subject interleave as "last login
    /// wins" and the loser's returned value simply fails validation later.
    ///
    /// # Errors
    /// * `Store` - The pre-existing entry could not be deleted (the stale
    ///   token must not stay valid after a failed rotation, so the call
    ///   aborts), or the new value could not be saved (the signed value was
    ///   never persisted and is unusable by construction)
    /// * `Invalid` - Signing failed; no store mutation has happened yet
    pub async fn create(&self, subject: u64) -> Result<String, TokenError> {
        match self.store.get(subject).await {
            Ok(_) => self
                .store
                .delete(subject)
                .await
                .map_err(TokenError::Store)?,
            Err(TokenStoreError::NotFound(_)) => {}
            Err(e) => return Err(TokenError::Store(e)),
        }

        let value = self.handler.generate(subject)?;

        let token = Token::new(subject, value.clone());
        self.store.save(&token).await.map_err(TokenError::Store)?;

        Ok(value)
    }

    /// Validate a presented token value.
    ///
    /// Verifies signature and claims, then requires an exact match against
    /// the store entry for the embedded subject. A cryptographically valid,
    /// unexpired token that has been superseded or revoked fails here.
    ///
    /// # Errors
    /// * `Invalid` - Malformed, bad signature, wrong algorithm, expired, or
    ///   bad claims
    /// * `NotActive` - No entry in the store for the subject
    /// * `Mismatch` - Store holds a different value for the subject
    /// * `Store` - Store unreachable; never reported as unauthorized
    pub async fn validate(&self, presented: &str) -> Result<Claims, TokenError> {
        let claims = self.handler.verify(presented)?;

        let stored = match self.store.get(claims.sub).await {
            Ok(value) => value,
            Err(TokenStoreError::NotFound(subject)) => {
                return Err(TokenError::NotActive(subject))
            }
            Err(e) => return Err(TokenError::Store(e)),
        };

        if stored != presented {
            tracing::warn!(subject = claims.sub, "Superseded token presented");
            return Err(TokenError::Mismatch);
        }

        Ok(claims)
    }

    /// Revoke the active token for `subject`, if any.
    ///
    /// Idempotent: revoking a subject with no active token is not an error.
    ///
    /// # Errors
    /// * `Store` - Store unreachable or command failed
    pub async fn revoke(&self, subject: u64) -> Result<(), TokenError> {
        self.store.delete(subject).await.map_err(TokenError::Store)
    }
}
