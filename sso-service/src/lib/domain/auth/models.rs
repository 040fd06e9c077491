use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::EmailError;
use crate::domain::auth::errors::LoginError;
use crate::domain::auth::errors::PasswordPolicyError;

/// Registered user record.
///
/// `password_hash` is the PHC string produced by the password hasher; it is
/// omitted from the `Debug` output.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User record as handed to the credential store, before an id is assigned.
#[derive(Clone)]
pub struct NewUser {
    pub login: Login,
    pub email: EmailAddress,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("login", &self.login)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// Non-empty and free of the reserved symbols `"!@#$%^&*()-_+=`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    pub const FORBIDDEN_SYMBOLS: &'static str = "\"!@#$%^&*()-_+=";

    /// Create a new valid login.
    ///
    /// # Errors
    /// * `Empty` - Login is empty
    /// * `ForbiddenSymbols` - Login contains a reserved symbol
    pub fn new(login: String) -> Result<Self, LoginError> {
        if login.is_empty() {
            return Err(LoginError::Empty);
        }

        if login.chars().any(|c| Self::FORBIDDEN_SYMBOLS.contains(c)) {
            return Err(LoginError::ForbiddenSymbols);
        }

        Ok(Self(login))
    }

    /// Wrap a login read back from the credential store.
    ///
    /// Stored rows were validated when written; rows predating the current
    /// symbol rules must still be able to log in.
    pub(crate) fn from_stored(login: String) -> Self {
        Self(login)
    }

    /// Get login as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Wrap an address read back from the credential store without re-parsing it.
    pub(crate) fn from_stored(email: String) -> Self {
        Self(email)
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted at registration.
///
/// At least eight Unicode code points. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 8;

    /// Create a password that satisfies the registration policy.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than `MIN_LENGTH` code points
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Signed, opaque identity token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Verified content of an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub login: Login,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    pub fn new(login: Login, email: EmailAddress, password: Password) -> Self {
        Self {
            login,
            email,
            password,
        }
    }
}

/// Command to authenticate an existing user.
///
/// Fields are taken as presented; only their presence is checked upstream.
pub struct LoginUserCommand {
    pub login: String,
    pub password: String,
}

impl LoginUserCommand {
    pub fn new(login: String, password: String) -> Self {
        Self { login, password }
    }
}

impl fmt::Debug for LoginUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginUserCommand")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_plain_names() {
        let login = Login::new("alice".to_string()).unwrap();
        assert_eq!(login.as_str(), "alice");
        assert!(Login::new("Алиса42".to_string()).is_ok());
    }

    #[test]
    fn test_login_rejects_each_forbidden_symbol() {
        for symbol in Login::FORBIDDEN_SYMBOLS.chars() {
            let candidate = format!("ali{}ce", symbol);
            assert_eq!(
                Login::new(candidate),
                Err(LoginError::ForbiddenSymbols),
                "symbol {:?} was accepted",
                symbol
            );
        }
    }

    #[test]
    fn test_login_rejects_empty() {
        assert_eq!(Login::new(String::new()), Err(LoginError::Empty));
    }

    #[test]
    fn test_stored_values_are_wrapped_as_is() {
        assert_eq!(Login::from_stored("ali-ce".to_string()).as_str(), "ali-ce");
        assert_eq!(
            EmailAddress::from_stored("legacy".to_string()).as_str(),
            "legacy"
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("alice@x.com".to_string()).is_ok());
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_password_counts_code_points() {
        // Eight code points, sixteen bytes
        assert!(Password::new("пароль12".to_string()).is_ok());
        assert_eq!(
            Password::new("short".to_string()),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        );
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let password = Password::new("longpassword123".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("longpassword123"));

        let user = User {
            id: UserId(1),
            login: Login::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@x.com".to_string()).unwrap(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };
        assert!(!format!("{:?}", user).contains("$argon2id$secret"));

        let command = LoginUserCommand::new("alice".to_string(), "hunter22".to_string());
        assert!(!format!("{:?}", command).contains("hunter22"));
    }
}
