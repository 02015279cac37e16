//! Novel Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AuthorSummary, CategoryRecord, NovelRecord, NovelRepositoryPort, NovelWithAuthor, TagRecord,
};
use crate::application::queries::{GetNovel, ListNovels};
use crate::domain::Pagination;

// ============================================================================
// Response DTOs
// ============================================================================

/// 小说详情：小说、作者、分类与标签
#[derive(Debug, Clone)]
pub struct NovelDetails {
    pub novel: NovelRecord,
    pub author: Option<AuthorSummary>,
    pub categories: Vec<CategoryRecord>,
    pub tags: Vec<TagRecord>,
}

/// 一页小说及分页元数据
#[derive(Debug, Clone)]
pub struct NovelPage {
    pub novels: Vec<NovelDetails>,
    pub pagination: Pagination,
}

/// 为一批小说批量加载分类与标签
pub(crate) async fn load_details(
    novel_repo: &dyn NovelRepositoryPort,
    novels: Vec<NovelWithAuthor>,
) -> Result<Vec<NovelDetails>, ApplicationError> {
    let ids: Vec<Uuid> = novels.iter().map(|n| n.novel.id).collect();
    let mut categories = novel_repo.find_categories(&ids).await?;
    let mut tags = novel_repo.find_tags(&ids).await?;

    Ok(novels
        .into_iter()
        .map(|n| {
            let id = n.novel.id;
            NovelDetails {
                novel: n.novel,
                author: n.author,
                categories: categories.remove(&id).unwrap_or_default(),
                tags: tags.remove(&id).unwrap_or_default(),
            }
        })
        .collect())
}

/// 读取单本小说详情
pub(crate) async fn find_details(
    novel_repo: &dyn NovelRepositoryPort,
    novel_id: Uuid,
) -> Result<NovelDetails, ApplicationError> {
    let novel = novel_repo
        .find_by_id(novel_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("Novel", novel_id))?;

    load_details(novel_repo, vec![novel])
        .await?
        .pop()
        .ok_or_else(|| ApplicationError::internal("Novel details disappeared"))
}

// ============================================================================
// Handlers
// ============================================================================

/// GetNovel Handler
pub struct GetNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl GetNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, query: GetNovel) -> Result<NovelDetails, ApplicationError> {
        find_details(self.novel_repo.as_ref(), query.novel_id).await
    }
}

/// ListNovels Handler
pub struct ListNovelsHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl ListNovelsHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, query: ListNovels) -> Result<NovelPage, ApplicationError> {
        let total = self.novel_repo.count(&query.filter).await?;
        let novels = self
            .novel_repo
            .find_many(
                &query.filter,
                query.sort,
                query.page.limit,
                query.page.offset(),
            )
            .await?;

        Ok(NovelPage {
            novels: load_details(self.novel_repo.as_ref(), novels).await?,
            pagination: Pagination::new(query.page, total),
        })
    }
}
