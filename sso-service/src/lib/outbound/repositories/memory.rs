use std::collections::HashMap;
use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserRepository;

/// Process-local credential store.
///
/// Data is lost when the process exits. Identifiers are assigned sequentially
/// starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<UserTable>,
}

#[derive(Debug, Default)]
struct UserTable {
    last_id: i64,
    /// Map of login -> user
    by_login: HashMap<String, User>,
    emails: HashSet<String>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> Result<UserId, RepositoryError> {
        // Uniqueness check and insert share one write guard.
        let mut table = self.state.write().await;

        if table.by_login.contains_key(user.login.as_str())
            || table.emails.contains(user.email.as_str())
        {
            return Err(RepositoryError::Conflict);
        }

        table.last_id += 1;
        let id = UserId(table.last_id);

        table.emails.insert(user.email.as_str().to_string());
        table.by_login.insert(
            user.login.as_str().to_string(),
            User {
                id,
                login: user.login,
                email: user.email,
                password_hash: user.password_hash,
                created_at: Utc::now(),
            },
        );

        Ok(id)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.state.read().await.by_login.get(login).cloned())
    }
}
