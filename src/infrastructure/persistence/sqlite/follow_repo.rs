//! SQLite Follow Repository - 用户关注关系

use async_trait::async_trait;
use uuid::Uuid;

use super::codec::{db_error, encode_time};
use super::user_repo::{UserRow, USER_COLUMNS};
use super::DbPool;
use crate::application::ports::{
    FollowEdgeRecord, FollowRepositoryPort, RepositoryError, UserRecord,
};
use crate::domain::FollowRole;

/// SQLite Follow Repository
pub struct SqliteFollowRepository {
    pool: DbPool,
}

impl SqliteFollowRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepositoryPort for SqliteFollowRepository {
    async fn create(&self, edge: &FollowEdgeRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO user_follows (id, follower_id, following_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(edge.id.to_string())
        .bind(edge.follower_id.to_string())
        .bind(edge.following_id.to_string())
        .bind(encode_time(&edge.created_at))
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn delete(&self, follower_id: Uuid, following_id: Uuid) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM user_follows WHERE follower_id = ? AND following_id = ?")
                .bind(follower_id.to_string())
                .bind(following_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_related_users(
        &self,
        user_id: Uuid,
        role: FollowRole,
    ) -> Result<Vec<UserRecord>, RepositoryError> {
        // 列出的用户扮演 role，锚点用户扮演另一端
        let sql = format!(
            r#"
            SELECT {columns}
            FROM user_follows f
            JOIN users u ON u.id = f.{listed}
            WHERE f.{anchor} = ? AND u.deleted_at IS NULL
            ORDER BY f.created_at DESC, u.id ASC
            "#,
            columns = USER_COLUMNS,
            listed = role.column(),
            anchor = role.counterpart().column(),
        );

        let rows: Vec<UserRow> = sqlx::query_as(&sql)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }
}
