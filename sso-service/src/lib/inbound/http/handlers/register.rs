use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::EmailError;
use crate::domain::auth::errors::LoginError;
use crate::domain::auth::errors::PasswordPolicyError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Login;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|user_id| ApiSuccess::new(StatusCode::CREATED, user_id.into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    login: String,
    password: String,
    email: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid email address")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Password(#[from] PasswordPolicyError),

    #[error("{0}")]
    Login(#[from] LoginError),
}

impl RegisterRequest {
    /// Validation order: email, password, login.
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        let login = Login::new(self.login)?;
        Ok(RegisterUserCommand::new(login, email, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub user_id: i64,
}

impl From<UserId> for RegisterResponseData {
    fn from(user_id: UserId) -> Self {
        Self { user_id: user_id.0 }
    }
}
