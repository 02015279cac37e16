//! Domain Layer - 领域层
//!
//! 包含以下限界上下文:
//! - Novel Context: 小说状态与排序
//! - User Context: 用户角色
//! - Social: 关注关系
//!
//! 以及分页与 slug 等共享值对象

pub mod novel;
pub mod pagination;
pub mod slug;
pub mod social;
pub mod user;

pub use pagination::{PageRequest, Pagination};
pub use slug::slugify;
pub use social::FollowRole;
