//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说连载状态
//! - 列表排序字段与方向

mod value_objects;

pub use value_objects::{NovelSortField, NovelStatus, SortOrder, DEFAULT_LANGUAGE};
