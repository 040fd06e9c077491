use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod login;
pub mod register;

pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Conflict => Status::already_exists("User already exists"),
            // Same code and message for both, as on the HTTP surface
            AuthError::NotFound | AuthError::InvalidCredentials => {
                Status::unauthenticated(AUTHENTICATION_FAILED)
            }
            AuthError::InvalidToken => Status::unauthenticated("Invalid or expired token"),
            AuthError::Internal(_) => Status::internal("Internal server error"),
        }
    }
}
