//! Novel Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{
    CreateNovel, DeleteNovel, IncrementNovelViews, RefreshChapterCount, UpdateNovel,
    UpdateNovelRating,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    NovelRecord, NovelRepositoryPort, RepositoryError, UserRepositoryPort,
};
use crate::application::queries::handlers::{find_details, NovelDetails};
use crate::domain::novel::DEFAULT_LANGUAGE;

const UNKNOWN_LINK: &str = "Unknown category or tag id";
const MAX_RATING: f64 = 5.0;

/// 关联表外键失败说明引用了不存在的分类或标签
fn link_error(err: RepositoryError) -> ApplicationError {
    match err {
        RepositoryError::ConstraintViolation(_) => ApplicationError::validation(UNKNOWN_LINK),
        other => other.into(),
    }
}

// ============================================================================
// CreateNovel
// ============================================================================

/// CreateNovel Handler
pub struct CreateNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateNovelHandler {
    pub fn new(
        novel_repo: Arc<dyn NovelRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
    ) -> Self {
        Self {
            novel_repo,
            user_repo,
        }
    }

    /// 插入小说与关联，随后返回完整详情
    pub async fn handle(&self, command: CreateNovel) -> Result<NovelDetails, ApplicationError> {
        if self.user_repo.find_by_id(command.author_id).await?.is_none() {
            return Err(ApplicationError::validation(format!(
                "Author {} does not exist",
                command.author_id
            )));
        }

        let now = Utc::now();
        let novel = NovelRecord {
            id: Uuid::new_v4(),
            title: command.title,
            author_id: command.author_id,
            description: command.description,
            cover_image: command.cover_image,
            language: command
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            status: command.status.unwrap_or_default(),
            average_rating: 0.0,
            total_views: 0,
            total_chapters: 0,
            published_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.novel_repo
            .create(&novel, &command.category_ids, &command.tag_ids)
            .await
            .map_err(link_error)?;

        tracing::info!(
            novel_id = %novel.id,
            title = %novel.title,
            categories = command.category_ids.len(),
            tags = command.tag_ids.len(),
            "Novel created"
        );

        find_details(self.novel_repo.as_ref(), novel.id).await
    }
}

// ============================================================================
// UpdateNovel
// ============================================================================

/// UpdateNovel Handler
pub struct UpdateNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl UpdateNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, command: UpdateNovel) -> Result<NovelDetails, ApplicationError> {
        let updated = self
            .novel_repo
            .update(
                command.novel_id,
                &command.patch,
                command.category_ids.as_deref(),
                command.tag_ids.as_deref(),
            )
            .await
            .map_err(link_error)?;

        if !updated {
            return Err(ApplicationError::not_found("Novel", command.novel_id));
        }

        tracing::info!(novel_id = %command.novel_id, "Novel updated");

        find_details(self.novel_repo.as_ref(), command.novel_id).await
    }
}

// ============================================================================
// DeleteNovel
// ============================================================================

/// DeleteNovel Handler
pub struct DeleteNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl DeleteNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, command: DeleteNovel) -> Result<(), ApplicationError> {
        if !self.novel_repo.soft_delete(command.novel_id).await? {
            return Err(ApplicationError::not_found("Novel", command.novel_id));
        }

        tracing::info!(novel_id = %command.novel_id, "Novel deleted");
        Ok(())
    }
}

// ============================================================================
// IncrementNovelViews
// ============================================================================

/// IncrementNovelViews Handler
pub struct IncrementNovelViewsHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl IncrementNovelViewsHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    /// 返回是否命中未删除的小说
    pub async fn handle(&self, command: IncrementNovelViews) -> Result<bool, ApplicationError> {
        Ok(self.novel_repo.increment_views(command.novel_id).await?)
    }
}

// ============================================================================
// RefreshChapterCount
// ============================================================================

/// RefreshChapterCount Handler
pub struct RefreshChapterCountHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl RefreshChapterCountHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, command: RefreshChapterCount) -> Result<u64, ApplicationError> {
        let total = self
            .novel_repo
            .update_total_chapters(command.novel_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Novel", command.novel_id))?;

        tracing::debug!(novel_id = %command.novel_id, total, "Chapter count refreshed");
        Ok(total)
    }
}

// ============================================================================
// UpdateNovelRating
// ============================================================================

/// UpdateNovelRating Handler
pub struct UpdateNovelRatingHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl UpdateNovelRatingHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, command: UpdateNovelRating) -> Result<(), ApplicationError> {
        if !command.rating.is_finite() || !(0.0..=MAX_RATING).contains(&command.rating) {
            return Err(ApplicationError::validation(format!(
                "Rating must be between 0 and {MAX_RATING}"
            )));
        }

        if !self
            .novel_repo
            .update_average_rating(command.novel_id, command.rating)
            .await?
        {
            return Err(ApplicationError::not_found("Novel", command.novel_id));
        }

        Ok(())
    }
}
