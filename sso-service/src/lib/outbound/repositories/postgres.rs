use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Login;
use crate::domain::auth::models::NewUser;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserRepository;

/// PostgreSQL credential store.
///
/// Uniqueness is enforced by the `users_login_key` and `users_email_key`
/// constraints, so a save is a single guarded insert.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: NewUser) -> Result<UserId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (login, email, pass_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user.login.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return RepositoryError::Conflict;
                }
            }
            RepositoryError::Database(e.to_string())
        })?;

        Ok(UserId(id))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, login, email, pass_hash, created_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.as_ref().map(user_from_row).transpose()
    }
}

fn user_from_row(row: &PgRow) -> Result<User, RepositoryError> {
    let database_error = |e: sqlx::Error| RepositoryError::Database(e.to_string());

    let id: i64 = row.try_get("id").map_err(database_error)?;
    let login: String = row.try_get("login").map_err(database_error)?;
    let email: String = row.try_get("email").map_err(database_error)?;
    let password_hash: String = row.try_get("pass_hash").map_err(database_error)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(database_error)?;

    Ok(User {
        id: UserId(id),
        login: Login::from_stored(login),
        email: EmailAddress::from_stored(email),
        password_hash,
        created_at,
    })
}
