//! User Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateUser, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{RepositoryError, UserRecord, UserRepositoryPort};

const EMAIL_TAKEN: &str = "User with this email already exists";

fn email_taken(err: RepositoryError) -> ApplicationError {
    match err {
        RepositoryError::Duplicate(_) => ApplicationError::business_rule(EMAIL_TAKEN),
        other => other.into(),
    }
}

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<UserRecord, ApplicationError> {
        // 预检只覆盖活跃账号；软删除账号的邮箱由唯一约束拦截，见 email_taken
        if self.user_repo.exists_by_email(&command.email).await? {
            return Err(ApplicationError::business_rule(EMAIL_TAKEN));
        }

        let now = Utc::now();
        let user = UserRecord {
            id: Uuid::new_v4(),
            name: command.name,
            email: command.email,
            password_hash: command.password_hash,
            avatar: command.avatar,
            role: command.role.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.user_repo.create(&user).await.map_err(email_taken)?;

        tracing::info!(user_id = %user.id, role = user.role.as_str(), "User created");
        Ok(user)
    }
}

/// UpdateUser Handler
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<UserRecord, ApplicationError> {
        if let Some(email) = &command.patch.email {
            if let Some(owner) = self.user_repo.find_by_email(email).await? {
                if owner.id != command.user_id {
                    return Err(ApplicationError::business_rule(EMAIL_TAKEN));
                }
            }
        }

        let user = self
            .user_repo
            .update(command.user_id, &command.patch)
            .await
            .map_err(email_taken)?
            .ok_or_else(|| ApplicationError::not_found("User", command.user_id))?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }
}

/// DeleteUser Handler
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<(), ApplicationError> {
        if !self.user_repo.soft_delete(command.user_id).await? {
            return Err(ApplicationError::not_found("User", command.user_id));
        }

        tracing::info!(user_id = %command.user_id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::UserPatch;
    use crate::domain::user::UserRole;
    use crate::infrastructure::persistence::sqlite::test_support::test_pool;
    use crate::infrastructure::persistence::sqlite::SqliteUserRepository;

    fn create(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "opaque".to_string(),
            avatar: None,
            role: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_reader_and_rejects_duplicates() {
        let repo = Arc::new(SqliteUserRepository::new(test_pool().await));
        let handler = CreateUserHandler::new(repo.clone());

        let user = handler.handle(create("Alice", "alice@example.com")).await.unwrap();
        assert_eq!(user.role, UserRole::Reader);
        assert_eq!(user.password_hash, "opaque");

        let err = handler
            .handle(create("Other", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::BusinessRuleViolation(ref m) if m == EMAIL_TAKEN));

        // 删除后邮箱仍不可复用
        DeleteUserHandler::new(repo.clone())
            .handle(DeleteUser { user_id: user.id })
            .await
            .unwrap();
        assert!(handler.handle(create("Again", "alice@example.com")).await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_email_of_soft_deleted_user() {
        let repo = Arc::new(SqliteUserRepository::new(test_pool().await));
        let handler = CreateUserHandler::new(repo.clone());

        let gone = handler.handle(create("Gone", "gone@example.com")).await.unwrap();
        assert!(repo.soft_delete(gone.id).await.unwrap());
        assert!(!repo.exists_by_email("gone@example.com").await.unwrap());

        let err = handler
            .handle(create("Again", "gone@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::BusinessRuleViolation(ref m) if m == EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn test_update_email_conflict_and_missing_user() {
        let repo = Arc::new(SqliteUserRepository::new(test_pool().await));
        let create_handler = CreateUserHandler::new(repo.clone());
        let update = UpdateUserHandler::new(repo.clone());

        let alice = create_handler.handle(create("Alice", "alice@example.com")).await.unwrap();
        create_handler.handle(create("Bob", "bob@example.com")).await.unwrap();

        let err = update
            .handle(UpdateUser {
                user_id: alice.id,
                patch: UserPatch {
                    email: Some("bob@example.com".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::BusinessRuleViolation(_)));

        // 保留自己的邮箱不算冲突
        let renamed = update
            .handle(UpdateUser {
                user_id: alice.id,
                patch: UserPatch {
                    name: Some("Alicia".to_string()),
                    email: Some("alice@example.com".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(renamed.name, "Alicia");

        let err = update
            .handle(UpdateUser {
                user_id: Uuid::new_v4(),
                patch: UserPatch::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
