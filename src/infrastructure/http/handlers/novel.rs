//! Novel HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    CreateNovel, DeleteNovel, Discovery, GetNovel, IncrementNovelViews, ListNovels, NovelFilter,
    NovelPatch, NovelSort, UpdateNovel,
};
use crate::domain::novel::{NovelSortField, NovelStatus, SortOrder};
use crate::domain::PageRequest;
use crate::infrastructure::http::dto::{ApiResponse, NovelListResponse, NovelResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{
    parse_id_list, IdParams, ValidatedJson, ValidatedPath, ValidatedQuery,
};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct AuthorParams {
    #[serde(rename = "authorId")]
    pub author_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(min = 1))]
    pub term: String,
}

/// 发现页查询串：分页 + 分类/标签过滤
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// 逗号分隔
    pub category_ids: Option<String>,
    /// 逗号分隔
    pub tag_ids: Option<String>,
}

impl DiscoveryQuery {
    fn into_query(self, discovery: Discovery) -> Result<ListNovels, ApiError> {
        let filter = NovelFilter {
            category_ids: parse_id_list("categoryIds", self.category_ids.as_deref())?,
            tag_ids: parse_id_list("tagIds", self.tag_ids.as_deref())?,
            ..Default::default()
        };
        Ok(ListNovels::discover(
            discovery,
            filter,
            PageRequest::new(self.page, self.limit),
        ))
    }
}

/// 作者作品查询串：分页 + 状态
#[derive(Debug, Deserialize, Validate)]
pub struct AuthorQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    pub status: Option<NovelStatus>,
}

/// 搜索查询串：分页、分类/标签过滤与排序
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// 逗号分隔
    pub category_ids: Option<String>,
    /// 逗号分隔
    pub tag_ids: Option<String>,
    pub sort_by: Option<NovelSortField>,
    pub sort_order: Option<SortOrder>,
}

impl SearchQuery {
    fn into_query(self, term: String) -> Result<ListNovels, ApiError> {
        let filter = NovelFilter {
            category_ids: parse_id_list("categoryIds", self.category_ids.as_deref())?,
            tag_ids: parse_id_list("tagIds", self.tag_ids.as_deref())?,
            ..Default::default()
        };
        let sort = NovelSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        };
        Ok(ListNovels::search(
            term,
            filter,
            sort,
            PageRequest::new(self.page, self.limit),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListNovelsQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    pub author_id: Option<Uuid>,
    pub status: Option<NovelStatus>,
    pub search: Option<String>,
    pub sort_by: Option<NovelSortField>,
    pub sort_order: Option<SortOrder>,
    /// 逗号分隔
    pub category_ids: Option<String>,
    /// 逗号分隔
    pub tag_ids: Option<String>,
}

impl ListNovelsQuery {
    fn into_query(self) -> Result<ListNovels, ApiError> {
        Ok(ListNovels {
            filter: NovelFilter {
                author_id: self.author_id,
                status: self.status,
                search: self.search.filter(|s| !s.is_empty()),
                category_ids: parse_id_list("categoryIds", self.category_ids.as_deref())?,
                tag_ids: parse_id_list("tagIds", self.tag_ids.as_deref())?,
            },
            sort: NovelSort {
                field: self.sort_by.unwrap_or_default(),
                order: self.sort_order.unwrap_or_default(),
            },
            page: PageRequest::new(self.page, self.limit),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNovelRequest {
    #[validate(length(min = 1))]
    pub title: String,
    pub author_id: Uuid,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub language: Option<String>,
    pub status: Option<NovelStatus>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNovelRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub language: Option<String>,
    pub status: Option<NovelStatus>,
    pub category_ids: Option<Vec<Uuid>>,
    pub tag_ids: Option<Vec<Uuid>>,
}

type NovelListResult = Result<Json<ApiResponse<NovelListResponse>>, ApiError>;

async fn list(state: &AppState, query: ListNovels) -> NovelListResult {
    let page = state.list_novels_handler.handle(query).await?;
    Ok(Json(ApiResponse::success(
        page.into(),
        "Novels retrieved successfully",
    )))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /novels
pub async fn list_novels(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<ListNovelsQuery>,
) -> NovelListResult {
    list(&state, query.into_query()?).await
}

/// GET /novels/popular
pub async fn popular_novels(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<DiscoveryQuery>,
) -> NovelListResult {
    list(&state, query.into_query(Discovery::Popular)?).await
}

/// GET /novels/top-rated
pub async fn top_rated_novels(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<DiscoveryQuery>,
) -> NovelListResult {
    list(&state, query.into_query(Discovery::TopRated)?).await
}

/// GET /novels/recent
pub async fn recent_novels(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<DiscoveryQuery>,
) -> NovelListResult {
    list(&state, query.into_query(Discovery::Recent)?).await
}

/// GET /novels/recently-updated
pub async fn recently_updated_novels(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<DiscoveryQuery>,
) -> NovelListResult {
    list(&state, query.into_query(Discovery::RecentlyUpdated)?).await
}

/// GET /novels/author/:authorId
pub async fn novels_by_author(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<AuthorParams>,
    ValidatedQuery(query): ValidatedQuery<AuthorQuery>,
) -> NovelListResult {
    let filter = NovelFilter {
        status: query.status,
        ..Default::default()
    };
    list(
        &state,
        ListNovels::by_author(
            params.author_id,
            filter,
            PageRequest::new(query.page, query.limit),
        ),
    )
    .await
}

/// GET /novels/search/:term
pub async fn search_novels(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<SearchParams>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> NovelListResult {
    list(&state, query.into_query(params.term)?).await
}

/// GET /novels/:id，读取成功后阅读数加一
pub async fn get_novel(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
) -> Result<Json<ApiResponse<NovelResponse>>, ApiError> {
    let details = state
        .get_novel_handler
        .handle(GetNovel {
            novel_id: params.id,
        })
        .await?;

    state
        .increment_views_handler
        .handle(IncrementNovelViews {
            novel_id: params.id,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        details.into(),
        "Novel retrieved successfully",
    )))
}

/// POST /novels
pub async fn create_novel(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateNovelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NovelResponse>>), ApiError> {
    let details = state
        .create_novel_handler
        .handle(CreateNovel {
            title: req.title,
            author_id: req.author_id,
            description: req.description,
            cover_image: req.cover_image,
            language: req.language,
            status: req.status,
            category_ids: req.category_ids,
            tag_ids: req.tag_ids,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            details.into(),
            "Novel created successfully",
        )),
    ))
}

/// PUT /novels/:id
pub async fn update_novel(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
    ValidatedJson(req): ValidatedJson<UpdateNovelRequest>,
) -> Result<Json<ApiResponse<NovelResponse>>, ApiError> {
    let details = state
        .update_novel_handler
        .handle(UpdateNovel {
            novel_id: params.id,
            patch: NovelPatch {
                title: req.title,
                description: req.description,
                cover_image: req.cover_image,
                language: req.language,
                status: req.status,
            },
            category_ids: req.category_ids,
            tag_ids: req.tag_ids,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        details.into(),
        "Novel updated successfully",
    )))
}

/// DELETE /novels/:id
pub async fn delete_novel(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .delete_novel_handler
        .handle(DeleteNovel {
            novel_id: params.id,
        })
        .await?;

    Ok(Json(ApiResponse::ok("Novel deleted successfully")))
}
