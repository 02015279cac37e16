//! Follow Commands

use uuid::Uuid;

/// 关注用户命令
#[derive(Debug, Clone)]
pub struct FollowUser {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}

/// 取消关注命令
#[derive(Debug, Clone)]
pub struct UnfollowUser {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}
