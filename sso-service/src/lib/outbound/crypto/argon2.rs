use crate::domain::auth::errors::PasswordHashError;
use crate::domain::auth::ports::PasswordHasher;

/// Argon2id password hasher backed by the shared `auth` library.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    inner: auth::PasswordHasher,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        self.inner
            .hash(password)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        self.inner.verify(password, hash)
    }
}
