//! SQLite Repository Implementation

use sqlx::SqlitePool;

use kernel::id::UserId;

use crate::domain::entities::ProfileRecord;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_objects::ProfileName;
use crate::error::ProfileResult;

/// SQLite-backed profile repository
#[derive(Clone)]
pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for SqliteProfileRepository {
    async fn upsert(&self, record: &ProfileRecord) -> ProfileResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id,
                normalized_name,
                encrypted_blob,
                updated_at
            ) VALUES (?, ?, ?, ?)
            ON CONFLICT (user_id, normalized_name) DO UPDATE SET
                encrypted_blob = excluded.encrypted_blob,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(record.user_id.value())
        .bind(record.name.as_str())
        .bind(&record.encrypted_blob)
        .bind(record.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_blob(
        &self,
        user_id: UserId,
        name: &ProfileName,
    ) -> ProfileResult<Option<String>> {
        let blob = sqlx::query_scalar::<_, String>(
            r#"
            SELECT encrypted_blob
            FROM profiles
            WHERE user_id = ? AND normalized_name = ?
            "#,
        )
        .bind(user_id.value())
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(blob)
    }

    async fn list_names(&self, user_id: UserId) -> ProfileResult<Vec<ProfileName>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT normalized_name
            FROM profiles
            WHERE user_id = ?
            ORDER BY normalized_name
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(names.into_iter().map(ProfileName::from_stored).collect())
    }

    async fn delete(&self, user_id: UserId, name: &ProfileName) -> ProfileResult<bool> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM profiles
            WHERE user_id = ? AND normalized_name = ?
            "#,
        )
        .bind(user_id.value())
        .bind(name.as_str())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }
}

/// Raw blob access for tamper tests
#[cfg(test)]
impl SqliteProfileRepository {
    pub(crate) async fn overwrite_blob(&self, user_id: UserId, name: &str, blob: &str) {
        sqlx::query("UPDATE profiles SET encrypted_blob = ? WHERE user_id = ? AND normalized_name = ?")
            .bind(blob)
            .bind(user_id.value())
            .bind(name)
            .execute(&self.pool)
            .await
            .unwrap();
    }

    pub(crate) async fn row_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}
