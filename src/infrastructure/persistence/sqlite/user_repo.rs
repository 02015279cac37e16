//! SQLite User Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;
use uuid::Uuid;

use super::codec::{db_error, decode_optional_time, decode_time, decode_uuid, encode_time};
use super::DbPool;
use crate::application::ports::{RepositoryError, UserPatch, UserRecord, UserRepositoryPort};
use crate::domain::user::UserRole;

/// users 表的完整列集合，带 `u.` 前缀以便在连接查询中复用
pub(super) const USER_COLUMNS: &str =
    "u.id, u.name, u.email, u.password_hash, u.avatar, u.role, u.created_at, u.updated_at, u.deleted_at";

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(super) struct UserRow {
    id: String,
    name: String,
    email: String,
    password_hash: String,
    avatar: Option<String>,
    role: String,
    created_at: String,
    updated_at: String,
    deleted_at: Option<String>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: decode_uuid(&row.id)?,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            avatar: row.avatar,
            role: UserRole::from_str(&row.role).unwrap_or_default(),
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
            deleted_at: decode_optional_time(row.deleted_at)?,
        })
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(&self, user: &UserRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, avatar, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(user.role.as_str())
        .bind(encode_time(&user.created_at))
        .bind(encode_time(&user.updated_at))
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM users u WHERE u.id = ? AND u.deleted_at IS NULL",
            USER_COLUMNS
        );
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM users u WHERE u.email = ? AND u.deleted_at IS NULL",
            USER_COLUMNS
        );
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE email = ? AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(count > 0)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &UserPatch,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        let mut assignments = vec!["updated_at = ?"];
        let mut binds = vec![encode_time(&Utc::now())];

        if let Some(name) = &patch.name {
            assignments.push("name = ?");
            binds.push(name.clone());
        }
        if let Some(email) = &patch.email {
            assignments.push("email = ?");
            binds.push(email.clone());
        }
        if let Some(password_hash) = &patch.password_hash {
            assignments.push("password_hash = ?");
            binds.push(password_hash.clone());
        }
        if let Some(avatar) = &patch.avatar {
            assignments.push("avatar = ?");
            binds.push(avatar.clone());
        }
        if let Some(role) = patch.role {
            assignments.push("role = ?");
            binds.push(role.as_str().to_string());
        }

        let sql = format!(
            "UPDATE users SET {} WHERE id = ? AND deleted_at IS NULL",
            assignments.join(", ")
        );
        let mut query = sqlx::query(&sql);
        for value in binds {
            query = query.bind(value);
        }
        let result = query
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let now = encode_time(&Utc::now());
        let result = sqlx::query(
            "UPDATE users SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&now)
        .bind(&now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
