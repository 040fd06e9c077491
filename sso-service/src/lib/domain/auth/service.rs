use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginUserCommand;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::TokenClaims;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::auth::ports::UserRepository;

/// Plaintext behind the decoy hash used on the unknown-login path.
const DECOY_PASSWORD: &str = "decoy-password-for-timing-equalisation";

/// Domain service implementation for registration and login.
///
/// Stateless apart from the decoy hash built at construction; all mutable state
/// lives in the repository, so one instance can serve any number of concurrent calls.
pub struct AuthService<UR, PH, TI>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    repository: Arc<UR>,
    password_hasher: Arc<PH>,
    token_issuer: Arc<TI>,
    decoy_hash: Option<String>,
}

impl<UR, PH, TI> AuthService<UR, PH, TI>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store
    /// * `password_hasher` - Password hashing implementation
    /// * `token_issuer` - Token signing implementation
    ///
    /// Hashes the decoy password once, so construction costs one password hash.
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PH>, token_issuer: Arc<TI>) -> Self {
        let decoy_hash = match password_hasher.hash(DECOY_PASSWORD) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::warn!(error = %e, "Decoy hash unavailable, unknown logins are not padded");
                None
            }
        };

        Self {
            repository,
            password_hasher,
            token_issuer,
            decoy_hash,
        }
    }

    /// Spend one password verification on a decoy hash so an unknown login
    /// costs as much as a wrong password.
    fn pad_verification(&self, password: &str) {
        if let Some(hash) = &self.decoy_hash {
            let _ = self.password_hasher.verify(password, hash);
        }
    }
}

#[async_trait]
impl<UR, PH, TI> AuthServicePort for AuthService<UR, PH, TI>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<UserId, AuthError> {
        let login = command.login.clone();

        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| {
                tracing::error!(login = %login, error = %e, "Password hashing failed");
                AuthError::Internal(e.to_string())
            })?;

        let new_user = NewUser {
            login: command.login,
            email: command.email,
            password_hash,
        };

        match self.repository.save(new_user).await {
            Ok(user_id) => {
                tracing::info!(user_id = %user_id, login = %login, "User registered");
                Ok(user_id)
            }
            Err(RepositoryError::Conflict) => {
                tracing::warn!(login = %login, "Registration rejected: user already exists");
                Err(AuthError::Conflict)
            }
            Err(RepositoryError::Database(message)) => {
                tracing::error!(login = %login, error = %message, "Failed to save user");
                Err(AuthError::Internal(message))
            }
        }
    }

    async fn login_user(&self, command: LoginUserCommand) -> Result<AccessToken, AuthError> {
        let user = match self.repository.find_by_login(&command.login).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                self.pad_verification(&command.password);
                tracing::info!(login = %command.login, "Login failed: unknown login");
                return Err(AuthError::NotFound);
            }
            Err(e) => {
                tracing::error!(login = %command.login, error = %e, "Failed to fetch user");
                return Err(AuthError::Internal(e.to_string()));
            }
        };

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)
        {
            tracing::info!(login = %command.login, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(user.login.as_str()).map_err(|e| {
            tracing::error!(login = %command.login, error = %e, "Token issuance failed");
            AuthError::Internal(e.to_string())
        })?;

        tracing::info!(user_id = %user.id, login = %user.login, "User logged in");
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.token_issuer.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })
    }
}
