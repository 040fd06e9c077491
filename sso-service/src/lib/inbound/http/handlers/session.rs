use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Describe the session carried by the caller's bearer token.
pub async fn session(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<AuthenticatedUser> for SessionResponseData {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            subject: user.claims.subject,
            issued_at: user.claims.issued_at,
            expires_at: user.claims.expires_at,
        }
    }
}
