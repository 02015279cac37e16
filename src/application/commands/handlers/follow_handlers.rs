//! Follow Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{FollowUser, UnfollowUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    FollowEdgeRecord, FollowRepositoryPort, RepositoryError, UserRepositoryPort,
};

/// FollowUser Handler
pub struct FollowUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    follow_repo: Arc<dyn FollowRepositoryPort>,
}

impl FollowUserHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        follow_repo: Arc<dyn FollowRepositoryPort>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    pub async fn handle(&self, command: FollowUser) -> Result<FollowEdgeRecord, ApplicationError> {
        if command.follower_id == command.following_id {
            return Err(ApplicationError::validation("Users cannot follow themselves"));
        }

        for id in [command.follower_id, command.following_id] {
            if self.user_repo.find_by_id(id).await?.is_none() {
                return Err(ApplicationError::not_found("User", id));
            }
        }

        let edge = FollowEdgeRecord {
            id: Uuid::new_v4(),
            follower_id: command.follower_id,
            following_id: command.following_id,
            created_at: Utc::now(),
        };

        self.follow_repo.create(&edge).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => {
                ApplicationError::business_rule("Already following this user")
            }
            other => other.into(),
        })?;

        tracing::info!(
            follower_id = %edge.follower_id,
            following_id = %edge.following_id,
            "User followed"
        );
        Ok(edge)
    }
}

/// UnfollowUser Handler
pub struct UnfollowUserHandler {
    follow_repo: Arc<dyn FollowRepositoryPort>,
}

impl UnfollowUserHandler {
    pub fn new(follow_repo: Arc<dyn FollowRepositoryPort>) -> Self {
        Self { follow_repo }
    }

    pub async fn handle(&self, command: UnfollowUser) -> Result<(), ApplicationError> {
        if !self
            .follow_repo
            .delete(command.follower_id, command.following_id)
            .await?
        {
            return Err(ApplicationError::not_found(
                "Follow",
                format!("{} -> {}", command.follower_id, command.following_id),
            ));
        }

        tracing::info!(
            follower_id = %command.follower_id,
            following_id = %command.following_id,
            "User unfollowed"
        );
        Ok(())
    }
}
