//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{FollowRepositoryPort, UserRecord, UserRepositoryPort};
use crate::application::queries::{GetUser, GetUserByEmail, ListFollows};

/// GetUser Handler
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<UserRecord, ApplicationError> {
        self.user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", query.user_id))
    }
}

/// GetUserByEmail Handler
pub struct GetUserByEmailHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserByEmailHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUserByEmail) -> Result<UserRecord, ApplicationError> {
        self.user_repo
            .find_by_email(&query.email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", &query.email))
    }
}

/// ListFollows Handler
pub struct ListFollowsHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    follow_repo: Arc<dyn FollowRepositoryPort>,
}

impl ListFollowsHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        follow_repo: Arc<dyn FollowRepositoryPort>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    pub async fn handle(&self, query: ListFollows) -> Result<Vec<UserRecord>, ApplicationError> {
        self.user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", query.user_id))?;

        Ok(self
            .follow_repo
            .find_related_users(query.user_id, query.role)
            .await?)
    }
}
