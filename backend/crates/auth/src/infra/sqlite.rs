//! SQLite Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed auth repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteAuthRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                username,
                password_hash,
                created_at
            ) VALUES (?, ?, ?)
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => AuthError::UserNameTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(user.into_user(UserId::from_raw(result.last_insert_rowid())))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                password_hash,
                created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: i64,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_name = UserName::new(&self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid username: {}", e)))?;
        let created_at = DateTime::<Utc>::from_timestamp_millis(self.created_at)
            .ok_or_else(|| AuthError::Internal("Invalid created_at".to_string()))?;

        Ok(User {
            user_id: UserId::from_raw(self.id),
            user_name,
            password_hash: UserPassword::from_phc_string(self.password_hash)?,
            created_at,
        })
    }
}

/// Fresh migrated in-memory database
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .unwrap();
    pool
}
