//! Category & Tag HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::application::{CreateCategory, CreateTag, ListCategories, ListTags};
use crate::infrastructure::http::dto::{ApiResponse, CategoryResponse, TagResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ValidatedJson;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub slug: Option<String>,
}

/// GET /categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponse>>>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;
    Ok(Json(ApiResponse::success(
        categories.into_iter().map(Into::into).collect(),
        "Categories retrieved successfully",
    )))
}

/// POST /categories
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponse>>), ApiError> {
    let category = state
        .create_category_handler
        .handle(CreateCategory {
            name: req.name,
            slug: req.slug,
            description: req.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            category.into(),
            "Category created successfully",
        )),
    ))
}

/// GET /tags
pub async fn list_tags(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TagResponse>>>, ApiError> {
    let tags = state.list_tags_handler.handle(ListTags).await?;
    Ok(Json(ApiResponse::success(
        tags.into_iter().map(Into::into).collect(),
        "Tags retrieved successfully",
    )))
}

/// POST /tags
pub async fn create_tag(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateTagRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TagResponse>>), ApiError> {
    let tag = state
        .create_tag_handler
        .handle(CreateTag {
            name: req.name,
            slug: req.slug,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(tag.into(), "Tag created successfully")),
    ))
}
