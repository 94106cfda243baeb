use async_trait::async_trait;

use crate::domain::token::errors::TokenStoreError;
use crate::domain::token::models::Token;

/// Key/value association of a subject id to its currently-active token value.
///
/// The store is an external, shared collaborator (one logical instance); the
/// domain relies on its per-key atomicity and never holds a lock across
/// calls.
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Retrieve the active token value for a subject.
    ///
    /// # Errors
    /// * `NotFound` - No token is currently active for this subject
    /// * `Backend` - Store unreachable or command failed
    async fn get(&self, subject: u64) -> Result<String, TokenStoreError>;

    /// Persist a token, unconditionally overwriting any previous value.
    ///
    /// Last-writer-wins; this single write is the atomic unit the store
    /// must guarantee.
    ///
    /// # Errors
    /// * `Backend` - Store unreachable or command failed
    async fn save(&self, token: &Token) -> Result<(), TokenStoreError>;

    /// Replace the active token for a subject.
    ///
    /// Identical semantics to [`save`](TokenStore::save) for this model;
    /// kept for call-site symmetry.
    ///
    /// # Errors
    /// * `Backend` - Store unreachable or command failed
    async fn update(&self, token: &Token) -> Result<(), TokenStoreError>;

    /// Remove the active token for a subject.
    ///
    /// Idempotent: deleting an absent key is not an error.
    ///
    /// # Errors
    /// * `Backend` - Store unreachable or command failed
    async fn delete(&self, subject: u64) -> Result<(), TokenStoreError>;
}
