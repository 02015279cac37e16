//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::novel::{NovelSortField, NovelStatus, SortOrder};
use crate::domain::user::UserRole;
use crate::domain::FollowRole;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    /// 外键或 CHECK 约束失败
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// 用户部分更新，None 表示不修改
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
}

/// 用户 Repository 端口
///
/// 所有读取都排除软删除的行
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 插入新用户
    async fn create(&self, user: &UserRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据邮箱查找用户（区分大小写）
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 邮箱是否已被未删除的用户占用
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// 部分更新，返回更新后的用户；用户不存在时返回 None
    async fn update(
        &self,
        id: Uuid,
        patch: &UserPatch,
    ) -> Result<Option<UserRecord>, RepositoryError>;

    /// 软删除，返回是否命中
    async fn soft_delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Novel Repository
// ============================================================================

/// 小说实体（用于持久化）
#[derive(Debug, Clone)]
pub struct NovelRecord {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub language: String,
    pub status: NovelStatus,
    pub average_rating: f64,
    pub total_views: u64,
    pub total_chapters: u64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// 作者投影（不含密码哈希）
#[derive(Debug, Clone)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
}

/// 小说及其作者
#[derive(Debug, Clone)]
pub struct NovelWithAuthor {
    pub novel: NovelRecord,
    pub author: Option<AuthorSummary>,
}

/// 小说部分更新，None 表示不修改
#[derive(Debug, Clone, Default)]
pub struct NovelPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub language: Option<String>,
    pub status: Option<NovelStatus>,
}

/// 小说列表过滤条件（各条件之间取交集）
#[derive(Debug, Clone, Default)]
pub struct NovelFilter {
    pub author_id: Option<Uuid>,
    pub status: Option<NovelStatus>,
    /// 标题或简介的子串匹配
    pub search: Option<String>,
    /// 至少属于其中一个分类
    pub category_ids: Vec<Uuid>,
    /// 至少带有其中一个标签
    pub tag_ids: Vec<Uuid>,
}

/// 小说列表排序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NovelSort {
    pub field: NovelSortField,
    pub order: SortOrder,
}

impl NovelSort {
    pub fn desc(field: NovelSortField) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }
}

/// 小说 Repository 端口
#[async_trait]
pub trait NovelRepositoryPort: Send + Sync {
    /// 在一个事务中插入小说及其分类、标签关联
    async fn create(
        &self,
        novel: &NovelRecord,
        category_ids: &[Uuid],
        tag_ids: &[Uuid],
    ) -> Result<(), RepositoryError>;

    /// 根据 ID 查找未删除的小说
    async fn find_by_id(&self, id: Uuid) -> Result<Option<NovelWithAuthor>, RepositoryError>;

    /// 按过滤条件分页查询
    async fn find_many(
        &self,
        filter: &NovelFilter,
        sort: NovelSort,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<NovelWithAuthor>, RepositoryError>;

    /// 统计满足过滤条件的小说数
    async fn count(&self, filter: &NovelFilter) -> Result<u64, RepositoryError>;

    /// 在一个事务中部分更新小说；提供的关联列表会整体替换旧关联
    ///
    /// 小说不存在或已删除时返回 false
    async fn update(
        &self,
        id: Uuid,
        patch: &NovelPatch,
        category_ids: Option<&[Uuid]>,
        tag_ids: Option<&[Uuid]>,
    ) -> Result<bool, RepositoryError>;

    /// 软删除，返回是否命中
    async fn soft_delete(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// 原子地将阅读数加一，返回是否命中
    async fn increment_views(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// 根据未删除的章节重新计算章节数，小说不存在时返回 None
    async fn update_total_chapters(&self, id: Uuid) -> Result<Option<u64>, RepositoryError>;

    /// 写入外部计算的平均评分，返回是否命中
    async fn update_average_rating(&self, id: Uuid, rating: f64) -> Result<bool, RepositoryError>;

    /// 批量加载小说的分类
    async fn find_categories(
        &self,
        novel_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CategoryRecord>>, RepositoryError>;

    /// 批量加载小说的标签
    async fn find_tags(
        &self,
        novel_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<TagRecord>>, RepositoryError>;
}

// ============================================================================
// Taxonomy Repository
// ============================================================================

/// 分类实体
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 标签实体
#[derive(Debug, Clone)]
pub struct TagRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// 分类与标签 Repository 端口
#[async_trait]
pub trait TaxonomyRepositoryPort: Send + Sync {
    async fn create_category(&self, category: &CategoryRecord) -> Result<(), RepositoryError>;

    /// 按名称排序的全部分类
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, RepositoryError>;

    async fn find_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CategoryRecord>, RepositoryError>;

    async fn create_tag(&self, tag: &TagRecord) -> Result<(), RepositoryError>;

    /// 按名称排序的全部标签
    async fn list_tags(&self) -> Result<Vec<TagRecord>, RepositoryError>;

    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<TagRecord>, RepositoryError>;
}

// ============================================================================
// Follow Repository
// ============================================================================

/// 关注边
#[derive(Debug, Clone)]
pub struct FollowEdgeRecord {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub following_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// 关注关系 Repository 端口
#[async_trait]
pub trait FollowRepositoryPort: Send + Sync {
    /// 插入关注边
    async fn create(&self, edge: &FollowEdgeRecord) -> Result<(), RepositoryError>;

    /// 删除关注边，返回是否命中
    async fn delete(&self, follower_id: Uuid, following_id: Uuid) -> Result<bool, RepositoryError>;

    /// 列出与 `user_id` 相连、且在边上扮演 `role` 的未删除用户
    ///
    /// `role = Follower` 得到关注 `user_id` 的人，`role = Following` 得到 `user_id` 关注的人
    async fn find_related_users(
        &self,
        user_id: Uuid,
        role: FollowRole,
    ) -> Result<Vec<UserRecord>, RepositoryError>;
}
