//! SQLite Taxonomy Repository - 分类与标签

use async_trait::async_trait;
use sqlx::FromRow;

use super::codec::{db_error, decode_time, decode_uuid, encode_time};
use super::DbPool;
use crate::application::ports::{
    CategoryRecord, RepositoryError, TagRecord, TaxonomyRepositoryPort,
};

/// SQLite Taxonomy Repository
pub struct SqliteTaxonomyRepository {
    pool: DbPool,
}

impl SqliteTaxonomyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: String,
}

impl TryFrom<CategoryRow> for CategoryRecord {
    type Error = RepositoryError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(CategoryRecord {
            id: decode_uuid(&row.id)?,
            name: row.name,
            slug: row.slug,
            description: row.description,
            created_at: decode_time(&row.created_at)?,
        })
    }
}

#[derive(FromRow)]
struct TagRow {
    id: String,
    name: String,
    slug: String,
    created_at: String,
}

impl TryFrom<TagRow> for TagRecord {
    type Error = RepositoryError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(TagRecord {
            id: decode_uuid(&row.id)?,
            name: row.name,
            slug: row.slug,
            created_at: decode_time(&row.created_at)?,
        })
    }
}

#[async_trait]
impl TaxonomyRepositoryPort for SqliteTaxonomyRepository {
    async fn create_category(&self, category: &CategoryRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO categories (id, name, slug, description, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(category.id.to_string())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(encode_time(&category.created_at))
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, RepositoryError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            "SELECT id, name, slug, description, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(CategoryRecord::try_from).collect()
    }

    async fn find_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CategoryRecord>, RepositoryError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "SELECT id, name, slug, description, created_at FROM categories WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(CategoryRecord::try_from).transpose()
    }

    async fn create_tag(&self, tag: &TagRecord) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO tags (id, name, slug, created_at) VALUES (?, ?, ?, ?)")
            .bind(tag.id.to_string())
            .bind(&tag.name)
            .bind(&tag.slug)
            .bind(encode_time(&tag.created_at))
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn list_tags(&self) -> Result<Vec<TagRecord>, RepositoryError> {
        let rows: Vec<TagRow> =
            sqlx::query_as("SELECT id, name, slug, created_at FROM tags ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        rows.into_iter().map(TagRecord::try_from).collect()
    }

    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<TagRecord>, RepositoryError> {
        let row: Option<TagRow> =
            sqlx::query_as("SELECT id, name, slug, created_at FROM tags WHERE slug = ?")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(TagRecord::try_from).transpose()
    }
}
