//! User Queries

use uuid::Uuid;

use crate::domain::FollowRole;

/// 按 ID 获取用户
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: Uuid,
}

/// 按邮箱获取用户（区分大小写）
#[derive(Debug, Clone)]
pub struct GetUserByEmail {
    pub email: String,
}

/// 列出在关注边上扮演 `role` 的相关用户
#[derive(Debug, Clone)]
pub struct ListFollows {
    pub user_id: Uuid,
    pub role: FollowRole,
}
