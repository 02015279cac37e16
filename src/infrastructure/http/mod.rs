//! HTTP Layer - RESTful API
//!
//! axum 路由、提取器、统一信封与错误映射

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;


pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer};
pub use state::AppState;
