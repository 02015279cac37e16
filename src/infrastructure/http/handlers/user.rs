//! User HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    CreateUser, DeleteUser, FollowUser, GetUser, GetUserByEmail, ListFollows, UnfollowUser,
    UpdateUser, UserPatch, UserRecord,
};
use crate::domain::user::UserRole;
use crate::domain::FollowRole;
use crate::infrastructure::http::dto::{ApiResponse, UserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{IdParams, ValidatedJson, ValidatedPath};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct EmailParams {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FollowerParams {
    pub id: Uuid,
    #[serde(rename = "followerId")]
    pub follower_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password_hash: String,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub password_hash: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub follower_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub following_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

fn user_list(users: Vec<UserRecord>) -> Vec<UserResponse> {
    users.into_iter().map(Into::into).collect()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let user = state
        .create_user_handler
        .handle(CreateUser {
            name: req.name,
            email: req.email,
            password_hash: req.password_hash,
            avatar: req.avatar,
            role: req.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(user.into(), "User created successfully")),
    ))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .get_user_handler
        .handle(GetUser { user_id: params.id })
        .await?;

    Ok(Json(ApiResponse::success(
        user.into(),
        "User retrieved successfully",
    )))
}

/// GET /users/email/:email
pub async fn get_user_by_email(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<EmailParams>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .get_user_by_email_handler
        .handle(GetUserByEmail {
            email: params.email,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        user.into(),
        "User retrieved successfully",
    )))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .update_user_handler
        .handle(UpdateUser {
            user_id: params.id,
            patch: UserPatch {
                name: req.name,
                email: req.email,
                password_hash: req.password_hash,
                avatar: req.avatar,
                role: req.role,
            },
        })
        .await?;

    Ok(Json(ApiResponse::success(
        user.into(),
        "User updated successfully",
    )))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .delete_user_handler
        .handle(DeleteUser { user_id: params.id })
        .await?;

    Ok(Json(ApiResponse::ok("User deleted successfully")))
}

/// GET /users/:id/followers
pub async fn list_followers(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state
        .list_follows_handler
        .handle(ListFollows {
            user_id: params.id,
            role: FollowRole::Follower,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        user_list(users),
        "Followers retrieved successfully",
    )))
}

/// GET /users/:id/following
pub async fn list_following(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state
        .list_follows_handler
        .handle(ListFollows {
            user_id: params.id,
            role: FollowRole::Following,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        user_list(users),
        "Following retrieved successfully",
    )))
}

/// POST /users/:id/followers，`followerId` 开始关注 `:id`
pub async fn follow_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<IdParams>,
    ValidatedJson(req): ValidatedJson<FollowRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FollowResponse>>), ApiError> {
    let edge = state
        .follow_user_handler
        .handle(FollowUser {
            follower_id: req.follower_id,
            following_id: params.id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            FollowResponse {
                id: edge.id,
                follower_id: edge.follower_id,
                following_id: edge.following_id,
                created_at: edge.created_at,
            },
            "User followed successfully",
        )),
    ))
}

/// DELETE /users/:id/followers/:followerId
pub async fn unfollow_user(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<FollowerParams>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .unfollow_user_handler
        .handle(UnfollowUser {
            follower_id: params.follower_id,
            following_id: params.id,
        })
        .await?;

    Ok(Json(ApiResponse::ok("User unfollowed successfully")))
}
