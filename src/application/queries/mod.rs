//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod note_queries;
mod novel_queries;
mod taxonomy_queries;
mod user_queries;

pub mod handlers;

pub use note_queries::*;
pub use novel_queries::*;
pub use taxonomy_queries::*;
pub use user_queries::*;
