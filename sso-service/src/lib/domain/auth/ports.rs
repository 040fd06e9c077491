use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::PasswordHashError;
use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginUserCommand;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::TokenClaims;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated login, email, and password
    ///
    /// # Returns
    /// Store-assigned identifier of the new user
    ///
    /// # Errors
    /// * `Conflict` - Login or email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<UserId, AuthError>;

    /// Check credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Login and plaintext password as presented
    ///
    /// # Returns
    /// Signed access token for the login
    ///
    /// # Errors
    /// * `NotFound` - No user with this login
    /// * `InvalidCredentials` - Password does not match
    /// * `Internal` - Storage or signing failed
    async fn login_user(&self, command: LoginUserCommand) -> Result<AccessToken, AuthError>;

    /// Verify an access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, foreign-algorithm, or expired token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Credential store.
///
/// Implementations are the sole arbiter of login uniqueness: `save` must check
/// and insert atomically.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `Conflict` - Login or email is already taken
    /// * `Database` - Storage operation failed
    async fn save(&self, user: NewUser) -> Result<UserId, RepositoryError>;

    /// Retrieve a user by login.
    ///
    /// # Returns
    /// Optional user (None if not found)
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError>;
}

/// One-way password hashing with embedded salt and parameters.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Hash a plaintext password.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing failed (e.g. input exceeds the hasher's bound)
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Constant-time check of `password` against `hash`.
    ///
    /// Returns false for a mismatch and for a malformed hash alike.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Issues and verifies signed, time-bound identity tokens.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Issue a token asserting `subject`.
    ///
    /// # Errors
    /// * `Signing` - Token could not be produced
    fn issue(&self, subject: &str) -> Result<AccessToken, TokenError>;

    /// Verify signature, algorithm, and expiry of a token.
    ///
    /// # Errors
    /// * `Rejected` - Token failed any check
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
