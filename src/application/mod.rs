//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（各 Repository 与 NoteStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Follow commands
    FollowUser,
    UnfollowUser,
    // Note commands
    CreateNote,
    DeleteNote,
    UpdateNote,
    // Novel commands
    CreateNovel,
    DeleteNovel,
    IncrementNovelViews,
    RefreshChapterCount,
    UpdateNovel,
    UpdateNovelRating,
    // Taxonomy commands
    CreateCategory,
    CreateTag,
    // User commands
    CreateUser,
    DeleteUser,
    UpdateUser,
    // Handlers
    handlers::{
        CreateCategoryHandler, CreateNoteHandler, CreateNovelHandler, CreateTagHandler,
        CreateUserHandler, DeleteNoteHandler, DeleteNovelHandler, DeleteUserHandler,
        FollowUserHandler, IncrementNovelViewsHandler, RefreshChapterCountHandler,
        UnfollowUserHandler, UpdateNoteHandler, UpdateNovelHandler, UpdateNovelRatingHandler,
        UpdateUserHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Notes
    Note,
    NoteError,
    NoteStorePort,
    // Repositories
    AuthorSummary,
    CategoryRecord,
    FollowEdgeRecord,
    FollowRepositoryPort,
    NovelFilter,
    NovelPatch,
    NovelRecord,
    NovelRepositoryPort,
    NovelSort,
    NovelWithAuthor,
    RepositoryError,
    TagRecord,
    TaxonomyRepositoryPort,
    UserPatch,
    UserRecord,
    UserRepositoryPort,
};

pub use queries::{
    // Note queries
    GetNote,
    ListNotes,
    // Novel queries
    Discovery,
    GetNovel,
    ListNovels,
    // Taxonomy queries
    ListCategories,
    ListTags,
    // User queries
    GetUser,
    GetUserByEmail,
    ListFollows,
    // Handlers
    handlers::{
        GetNoteHandler, GetNovelHandler, GetUserByEmailHandler, GetUserHandler,
        ListCategoriesHandler, ListFollowsHandler, ListNotesHandler, ListNovelsHandler,
        ListTagsHandler, NovelDetails, NovelPage,
    },
};
