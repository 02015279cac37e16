//! Taxonomy Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateCategory, CreateTag};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryRecord, RepositoryError, TagRecord, TaxonomyRepositoryPort,
};
use crate::domain::slugify;

/// 显式 slug 原样规范化，缺省时由名称生成
fn resolve_slug(name: &str, slug: Option<&str>) -> Result<String, ApplicationError> {
    let slug = slugify(slug.unwrap_or(name));
    if slug.is_empty() {
        return Err(ApplicationError::validation("Slug cannot be empty"));
    }
    Ok(slug)
}

fn duplicate(kind: &str) -> impl FnOnce(RepositoryError) -> ApplicationError + '_ {
    move |err| match err {
        RepositoryError::Duplicate(_) => ApplicationError::business_rule(format!(
            "{kind} with this name or slug already exists"
        )),
        other => other.into(),
    }
}

/// CreateCategory Handler
pub struct CreateCategoryHandler {
    taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>,
}

impl CreateCategoryHandler {
    pub fn new(taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>) -> Self {
        Self { taxonomy_repo }
    }

    pub async fn handle(&self, command: CreateCategory) -> Result<CategoryRecord, ApplicationError> {
        let category = CategoryRecord {
            id: Uuid::new_v4(),
            slug: resolve_slug(&command.name, command.slug.as_deref())?,
            name: command.name,
            description: command.description,
            created_at: Utc::now(),
        };

        self.taxonomy_repo
            .create_category(&category)
            .await
            .map_err(duplicate("Category"))?;

        tracing::info!(slug = %category.slug, "Category created");
        Ok(category)
    }
}

/// CreateTag Handler
pub struct CreateTagHandler {
    taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>,
}

impl CreateTagHandler {
    pub fn new(taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>) -> Self {
        Self { taxonomy_repo }
    }

    pub async fn handle(&self, command: CreateTag) -> Result<TagRecord, ApplicationError> {
        let tag = TagRecord {
            id: Uuid::new_v4(),
            slug: resolve_slug(&command.name, command.slug.as_deref())?,
            name: command.name,
            created_at: Utc::now(),
        };

        self.taxonomy_repo
            .create_tag(&tag)
            .await
            .map_err(duplicate("Tag"))?;

        tracing::info!(slug = %tag.slug, "Tag created");
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::test_support::test_pool;
    use crate::infrastructure::persistence::sqlite::SqliteTaxonomyRepository;

    #[tokio::test]
    async fn test_category_slug_generation_and_duplicates() {
        let repo = Arc::new(SqliteTaxonomyRepository::new(test_pool().await));
        let handler = CreateCategoryHandler::new(repo);

        let created = handler
            .handle(CreateCategory {
                name: "Slice of Life".to_string(),
                slug: None,
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(created.slug, "slice-of-life");

        let err = handler
            .handle(CreateCategory {
                name: "Slice Of Life!".to_string(),
                slug: None,
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::BusinessRuleViolation(_)));
    }

    #[tokio::test]
    async fn test_tag_requires_usable_slug() {
        let repo = Arc::new(SqliteTaxonomyRepository::new(test_pool().await));
        let handler = CreateTagHandler::new(repo);

        let err = handler
            .handle(CreateTag {
                name: "???".to_string(),
                slug: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));

        let tag = handler
            .handle(CreateTag {
                name: "Editor's Choice".to_string(),
                slug: Some("editors-choice".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(tag.slug, "editors-choice");
        assert_eq!(tag.name, "Editor's Choice");
    }
}
