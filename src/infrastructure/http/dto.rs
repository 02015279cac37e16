//! Data Transfer Objects
//!
//! 统一成功信封以及多个路由共用的响应结构

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::{
    AuthorSummary, CategoryRecord, NovelDetails, NovelPage, TagRecord, UserRecord,
};
use crate::domain::novel::NovelStatus;
use crate::domain::user::UserRole;
use crate::domain::Pagination;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl ApiResponse<()> {
    /// 成功但无数据
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
        }
    }
}

// ============================================================================
// User DTOs
// ============================================================================

/// 用户对外表示，不含密码哈希
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Taxonomy DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(c: CategoryRecord) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<TagRecord> for TagResponse {
    fn from(t: TagRecord) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
            created_at: t.created_at,
        }
    }
}

// ============================================================================
// Novel DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
}

impl From<AuthorSummary> for AuthorResponse {
    fn from(a: AuthorSummary) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            avatar: a.avatar,
            role: a.role,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelResponse {
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
    pub author: Option<AuthorResponse>,
    pub categories: Vec<CategoryResponse>,
    pub tags: Vec<TagResponse>,
}

impl From<NovelDetails> for NovelResponse {
    fn from(details: NovelDetails) -> Self {
        let novel = details.novel;
        Self {
            id: novel.id,
            title: novel.title,
            author_id: novel.author_id,
            description: novel.description,
            cover_image: novel.cover_image,
            language: novel.language,
            status: novel.status,
            average_rating: novel.average_rating,
            total_views: novel.total_views,
            total_chapters: novel.total_chapters,
            published_at: novel.published_at,
            created_at: novel.created_at,
            updated_at: novel.updated_at,
            author: details.author.map(Into::into),
            categories: details.categories.into_iter().map(Into::into).collect(),
            tags: details.tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// 分页列表：`{ novels, pagination }`
#[derive(Debug, Serialize)]
pub struct NovelListResponse {
    pub novels: Vec<NovelResponse>,
    pub pagination: Pagination,
}

impl From<NovelPage> for NovelListResponse {
    fn from(page: NovelPage) -> Self {
        Self {
            novels: page.novels.into_iter().map(Into::into).collect(),
            pagination: page.pagination,
        }
    }
}
