//! Authentication primitives
//!
//! Provides the cryptographic building blocks of the SSO service:
//! - Password hashing (Argon2id)
//! - JWT token issuance and validation (HS256 only)
//!
//! The service defines its own capability traits and adapts these implementations,
//! which keeps this crate free of domain types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let (token, _) = handler.issue("alice").unwrap();
//! let claims = handler.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
