//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;
use std::time::Instant;

use crate::application::{
    // Command handlers
    CreateCategoryHandler, CreateNoteHandler, CreateNovelHandler, CreateTagHandler,
    CreateUserHandler, DeleteNoteHandler, DeleteNovelHandler, DeleteUserHandler,
    FollowUserHandler, IncrementNovelViewsHandler, UnfollowUserHandler, UpdateNoteHandler,
    UpdateNovelHandler, UpdateUserHandler,
    // Query handlers
    GetNoteHandler, GetNovelHandler, GetUserByEmailHandler, GetUserHandler,
    ListCategoriesHandler, ListFollowsHandler, ListNotesHandler, ListNovelsHandler,
    ListTagsHandler,
    // Ports
    FollowRepositoryPort, NoteStorePort, NovelRepositoryPort, TaxonomyRepositoryPort,
    UserRepositoryPort,
};
use crate::config::RuntimeEnvironment;

/// 应用状态
///
/// 笔记存储作为实例注入，不使用全局变量
pub struct AppState {
    // ========== Runtime ==========
    pub environment: RuntimeEnvironment,
    pub started_at: Instant,

    // ========== Command Handlers ==========
    pub create_novel_handler: CreateNovelHandler,
    pub update_novel_handler: UpdateNovelHandler,
    pub delete_novel_handler: DeleteNovelHandler,
    pub increment_views_handler: IncrementNovelViewsHandler,
    pub create_user_handler: CreateUserHandler,
    pub update_user_handler: UpdateUserHandler,
    pub delete_user_handler: DeleteUserHandler,
    pub follow_user_handler: FollowUserHandler,
    pub unfollow_user_handler: UnfollowUserHandler,
    pub create_category_handler: CreateCategoryHandler,
    pub create_tag_handler: CreateTagHandler,
    pub create_note_handler: CreateNoteHandler,
    pub update_note_handler: UpdateNoteHandler,
    pub delete_note_handler: DeleteNoteHandler,

    // ========== Query Handlers ==========
    pub get_novel_handler: GetNovelHandler,
    pub list_novels_handler: ListNovelsHandler,
    pub get_user_handler: GetUserHandler,
    pub get_user_by_email_handler: GetUserByEmailHandler,
    pub list_follows_handler: ListFollowsHandler,
    pub list_categories_handler: ListCategoriesHandler,
    pub list_tags_handler: ListTagsHandler,
    pub get_note_handler: GetNoteHandler,
    pub list_notes_handler: ListNotesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        environment: RuntimeEnvironment,
        novel_repo: Arc<dyn NovelRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>,
        follow_repo: Arc<dyn FollowRepositoryPort>,
        note_store: Arc<dyn NoteStorePort>,
    ) -> Self {
        Self {
            environment,
            started_at: Instant::now(),

            // Command handlers
            create_novel_handler: CreateNovelHandler::new(novel_repo.clone(), user_repo.clone()),
            update_novel_handler: UpdateNovelHandler::new(novel_repo.clone()),
            delete_novel_handler: DeleteNovelHandler::new(novel_repo.clone()),
            increment_views_handler: IncrementNovelViewsHandler::new(novel_repo.clone()),
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            update_user_handler: UpdateUserHandler::new(user_repo.clone()),
            delete_user_handler: DeleteUserHandler::new(user_repo.clone()),
            follow_user_handler: FollowUserHandler::new(user_repo.clone(), follow_repo.clone()),
            unfollow_user_handler: UnfollowUserHandler::new(follow_repo.clone()),
            create_category_handler: CreateCategoryHandler::new(taxonomy_repo.clone()),
            create_tag_handler: CreateTagHandler::new(taxonomy_repo.clone()),
            create_note_handler: CreateNoteHandler::new(note_store.clone()),
            update_note_handler: UpdateNoteHandler::new(note_store.clone()),
            delete_note_handler: DeleteNoteHandler::new(note_store.clone()),

            // Query handlers
            get_novel_handler: GetNovelHandler::new(novel_repo.clone()),
            list_novels_handler: ListNovelsHandler::new(novel_repo),
            get_user_handler: GetUserHandler::new(user_repo.clone()),
            get_user_by_email_handler: GetUserByEmailHandler::new(user_repo.clone()),
            list_follows_handler: ListFollowsHandler::new(user_repo, follow_repo),
            list_categories_handler: ListCategoriesHandler::new(taxonomy_repo.clone()),
            list_tags_handler: ListTagsHandler::new(taxonomy_repo),
            get_note_handler: GetNoteHandler::new(note_store.clone()),
            list_notes_handler: ListNotesHandler::new(note_store),
        }
    }
}
