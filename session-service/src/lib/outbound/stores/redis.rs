use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use redis::Client;

use crate::domain::token::errors::TokenStoreError;
use crate::domain::token::models::Token;
use crate::domain::token::ports::TokenStore;

/// Redis-backed token store.
///
/// One key per subject, `session:{namespace}:{subject}`, holding the
/// currently-active token value. SET and DEL give the per-key atomicity the
/// domain relies on. Entries carry a TTL matching the token lifetime so
/// abandoned sessions age out of the cache on their own.
pub struct RedisTokenStore {
    client: Client,
    namespace: String,
    ttl_secs: u64,
}

impl RedisTokenStore {
    pub fn new(client: Client, namespace: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            client,
            namespace: namespace.into(),
            ttl_secs,
        }
    }

    fn key(&self, subject: u64) -> String {
        format!("session:{}:{}", self.namespace, subject)
    }

    async fn connection(&self) -> Result<MultiplexedConnection, TokenStoreError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| TokenStoreError::Backend(format!("failed to connect: {}", e)))
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn get(&self, subject: u64) -> Result<String, TokenStoreError> {
        let mut conn = self.connection().await?;

        let value: Option<String> = conn
            .get(self.key(subject))
            .await
            .map_err(|e| TokenStoreError::Backend(e.to_string()))?;

        value.ok_or(TokenStoreError::NotFound(subject))
    }

    async fn save(&self, token: &Token) -> Result<(), TokenStoreError> {
        let mut conn = self.connection().await?;

        let _: () = conn
            .set_ex(self.key(token.subject), &token.value, self.ttl_secs)
            .await
            .map_err(|e| TokenStoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, token: &Token) -> Result<(), TokenStoreError> {
        // Same unconditional overwrite as save
        self.save(token).await
    }

    async fn delete(&self, subject: u64) -> Result<(), TokenStoreError> {
        let mut conn = self.connection().await?;

        // DEL of an absent key replies 0; idempotent by contract
        let _: u64 = conn
            .del(self.key(subject))
            .await
            .map_err(|e| TokenStoreError::Backend(e.to_string()))?;

        Ok(())
    }
}
