//! Authentication primitives library
//!
//! Provides the cryptographic building blocks for session management:
//! - Password hashing (Argon2id)
//! - Signed session token generation and verification (HS256 JWT)
//!
//! Services compose these primitives behind their own domain ports.
//! This crate holds no state beyond its configuration: the signing secret
//! and token lifetime are injected through constructors, never read from
//! globals.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = handler.generate(42).unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
