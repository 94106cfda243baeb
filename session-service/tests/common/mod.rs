use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;
use session_service::domain::session::errors::RepositoryError;
use session_service::domain::session::models::User;
use session_service::domain::session::models::UserId;
use session_service::domain::session::models::Username;
use session_service::domain::session::ports::UserRepository;
use session_service::domain::session::service::AuthService;
use session_service::domain::token::errors::TokenStoreError;
use session_service::domain::token::models::Token;
use session_service::domain::token::ports::TokenStore;
use session_service::domain::token::service::TokenService;

pub const SECRET: &[u8] = b"integration_secret_32_bytes_long!!";

/// Token store backed by a plain map, standing in for the cache.
#[derive(Default)]
pub struct InMemoryTokenStore {
    entries: Mutex<HashMap<u64, String>>,
}

impl InMemoryTokenStore {
    pub fn active_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self, subject: u64) -> Result<String, TokenStoreError> {
        self.entries
            .lock()
            .unwrap()
            .get(&subject)
            .cloned()
            .ok_or(TokenStoreError::NotFound(subject))
    }

    async fn save(&self, token: &Token) -> Result<(), TokenStoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(token.subject, token.value.clone());
        Ok(())
    }

    async fn update(&self, token: &Token) -> Result<(), TokenStoreError> {
        self.save(token).await
    }

    async fn delete(&self, subject: u64) -> Result<(), TokenStoreError> {
        self.entries.lock().unwrap().remove(&subject);
        Ok(())
    }
}

/// Read-only user repository over a fixed set of users.
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn with_user(id: u64, username: &str, password: &str) -> Self {
        let password_hash = PasswordHasher::new().hash(password).unwrap();
        Self {
            users: vec![User {
                id: UserId(id),
                username: Username::new(username.to_string()).unwrap(),
                password_hash,
                created_at: Utc::now(),
            }],
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == *username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }
}

pub struct TestHarness {
    pub service: AuthService<InMemoryUserRepository, InMemoryTokenStore>,
    pub access_store: Arc<InMemoryTokenStore>,
    pub refresh_store: Arc<InMemoryTokenStore>,
}

impl TestHarness {
    /// Wire a full service over in-memory collaborators, with one known
    /// user alice/s3cret! under id 7.
    pub fn new() -> Self {
        Self::with_access_ttl(Duration::hours(1))
    }

    pub fn with_access_ttl(access_ttl: Duration) -> Self {
        let access_store = Arc::new(InMemoryTokenStore::default());
        let refresh_store = Arc::new(InMemoryTokenStore::default());

        let repository = Arc::new(InMemoryUserRepository::with_user(7, "alice", "s3cret!"));

        let service = AuthService::new(
            repository,
            TokenService::new(
                Arc::new(JwtHandler::new(SECRET, access_ttl)),
                Arc::clone(&access_store),
            ),
            TokenService::new(
                Arc::new(JwtHandler::new(SECRET, Duration::days(7))),
                Arc::clone(&refresh_store),
            ),
        );

        Self {
            service,
            access_store,
            refresh_store,
        }
    }
}
