//! Social - 用户关注关系
//!
//! 关注边是 users 表上的自引用关系，两个端点各自扮演一个角色。

use serde::{Deserialize, Serialize};

/// 用户在关注边上的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowRole {
    /// 发起关注的一方
    Follower,
    /// 被关注的一方
    Following,
}

impl FollowRole {
    /// 该角色在 user_follows 表中对应的列
    pub fn column(&self) -> &'static str {
        match self {
            FollowRole::Follower => "follower_id",
            FollowRole::Following => "following_id",
        }
    }

    /// 同一条边上的另一个角色
    pub fn counterpart(&self) -> Self {
        match self {
            FollowRole::Follower => FollowRole::Following,
            FollowRole::Following => FollowRole::Follower,
        }
    }
}
