//! HTTP Routes
//!
//! API Endpoints:
//! - /health                         GET              健康检查
//! - /health/ping                    GET              纯文本 pong
//! - /novels                         GET, POST        列表（过滤/排序/分页）与创建
//! - /novels/popular                 GET              按阅读数
//! - /novels/top-rated               GET              按评分
//! - /novels/recent                  GET              按创建时间
//! - /novels/recently-updated        GET              按更新时间
//! - /novels/author/:authorId        GET              作者的小说
//! - /novels/search/:term            GET              标题或简介搜索
//! - /novels/:id                     GET, PUT, DELETE 详情（阅读数加一）、更新、软删除
//! - /users                          POST             创建用户
//! - /users/email/:email             GET              按邮箱查找
//! - /users/:id                      GET, PUT, DELETE
//! - /users/:id/followers            GET, POST        粉丝列表与关注
//! - /users/:id/followers/:followerId DELETE          取消关注
//! - /users/:id/following            GET              关注列表
//! - /categories                     GET, POST
//! - /tags                           GET, POST
//! - /notes                          GET, POST        内存笔记演示
//! - /notes/:id                      GET, PUT, DELETE

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/novels", novel_routes())
        .nest("/users", user_routes())
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/tags", get(handlers::list_tags).post(handlers::create_tag))
        .nest("/notes", note_routes())
}

/// Health 路由
fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::health))
        .route("/ping", get(handlers::ping))
}

/// Novel 路由
fn novel_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_novels).post(handlers::create_novel))
        .route("/popular", get(handlers::popular_novels))
        .route("/top-rated", get(handlers::top_rated_novels))
        .route("/recent", get(handlers::recent_novels))
        .route("/recently-updated", get(handlers::recently_updated_novels))
        .route("/author/:authorId", get(handlers::novels_by_author))
        .route("/search/:term", get(handlers::search_novels))
        .route(
            "/:id",
            get(handlers::get_novel)
                .put(handlers::update_novel)
                .delete(handlers::delete_novel),
        )
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::create_user))
        .route("/email/:email", get(handlers::get_user_by_email))
        .route(
            "/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(
            "/:id/followers",
            get(handlers::list_followers).post(handlers::follow_user),
        )
        .route(
            "/:id/followers/:followerId",
            delete(handlers::unfollow_user),
        )
        .route("/:id/following", get(handlers::list_following))
}

/// Notes 路由
fn note_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_notes).post(handlers::create_note))
        .route(
            "/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
}
