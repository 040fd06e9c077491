use tonic::Status;

use crate::domain::auth::models::LoginUserCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginUserRequest;
use crate::proto::LoginUserResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginUserRequest,
) -> Result<LoginUserResponse, Status> {
    if request.login.is_empty() || request.password.is_empty() {
        return Err(Status::invalid_argument("Login and password are required"));
    }

    let token = service
        .login_user(LoginUserCommand::new(request.login, request.password))
        .await?;

    Ok(LoginUserResponse {
        token: token.into_inner(),
    })
}
