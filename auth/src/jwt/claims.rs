use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Session token claims.
///
/// Deliberately minimal: subject id, the two timestamps, and a unique token
/// id. Everything else about a session lives in the token store, which stays
/// authoritative for revocation. The `jti` guarantees two tokens issued for
/// the same subject within the same second are still distinct values, so
/// rotation always observably supersedes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (numeric user id)
    pub sub: u64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Unique token identifier
    pub jti: String,
}

impl Claims {
    /// Create claims for a subject with expiry `ttl` from now.
    pub fn new(subject: u64, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check whether the expiry has elapsed at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
