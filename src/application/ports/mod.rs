//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod note_store;
mod repositories;

pub use note_store::{Note, NoteError, NoteStorePort};
pub use repositories::{
    AuthorSummary, CategoryRecord, FollowEdgeRecord, FollowRepositoryPort, NovelFilter,
    NovelPatch, NovelRecord, NovelRepositoryPort, NovelSort, NovelWithAuthor, RepositoryError,
    TagRecord, TaxonomyRepositoryPort, UserPatch, UserRecord, UserRepositoryPort,
};
