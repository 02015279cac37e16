//! Taxonomy Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRecord, TagRecord, TaxonomyRepositoryPort};
use crate::application::queries::{ListCategories, ListTags};

/// ListCategories Handler
pub struct ListCategoriesHandler {
    taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>) -> Self {
        Self { taxonomy_repo }
    }

    pub async fn handle(&self, _query: ListCategories) -> Result<Vec<CategoryRecord>, ApplicationError> {
        Ok(self.taxonomy_repo.list_categories().await?)
    }
}

/// ListTags Handler
pub struct ListTagsHandler {
    taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>,
}

impl ListTagsHandler {
    pub fn new(taxonomy_repo: Arc<dyn TaxonomyRepositoryPort>) -> Self {
        Self { taxonomy_repo }
    }

    pub async fn handle(&self, _query: ListTags) -> Result<Vec<TagRecord>, ApplicationError> {
        Ok(self.taxonomy_repo.list_tags().await?)
    }
}
