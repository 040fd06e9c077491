use tonic::Status;

use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Login;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterUserRequest;
use crate::proto::RegisterUserResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterUserRequest,
) -> Result<RegisterUserResponse, Status> {
    let command = try_into_command(request)?;

    let user_id = service.register_user(command).await?;
    Ok(RegisterUserResponse { user_id: user_id.0 })
}

/// Validation order: email, password, login.
fn try_into_command(request: RegisterUserRequest) -> Result<RegisterUserCommand, Status> {
    let email = EmailAddress::new(request.email)
        .map_err(|_| Status::invalid_argument("Invalid email address"))?;
    let password =
        Password::new(request.password).map_err(|e| Status::invalid_argument(e.to_string()))?;
    let login = Login::new(request.login).map_err(|e| Status::invalid_argument(e.to_string()))?;

    Ok(RegisterUserCommand::new(login, email, password))
}
