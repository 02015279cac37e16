//! User Commands

use uuid::Uuid;

use crate::application::ports::UserPatch;
use crate::domain::user::UserRole;

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// 客户端提供的不透明哈希，原样存储
    pub password_hash: String,
    pub avatar: Option<String>,
    /// 缺省为 reader
    pub role: Option<UserRole>,
}

/// 更新用户命令
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: Uuid,
    pub patch: UserPatch,
}

/// 删除用户命令（软删除）
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: Uuid,
}
