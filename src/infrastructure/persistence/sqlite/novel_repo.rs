//! SQLite Novel Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqliteConnection};
use std::collections::HashMap;
use uuid::Uuid;

use super::codec::{
    db_error, decode_optional_time, decode_time, decode_uuid, encode_time, placeholders,
};
use super::DbPool;
use crate::application::ports::{
    AuthorSummary, CategoryRecord, NovelFilter, NovelPatch, NovelRecord, NovelRepositoryPort,
    NovelSort, NovelWithAuthor, RepositoryError, TagRecord,
};
use crate::domain::novel::{NovelSortField, NovelStatus};
use crate::domain::user::UserRole;

/// 小说列与作者投影
const NOVEL_SELECT: &str = r#"
    SELECT n.id, n.title, n.author_id, n.description, n.cover_image, n.language, n.status,
           n.average_rating, n.total_views, n.total_chapters, n.published_at,
           n.created_at, n.updated_at, n.deleted_at,
           u.name AS author_name, u.email AS author_email,
           u.avatar AS author_avatar, u.role AS author_role
    FROM novels n
    LEFT JOIN users u ON u.id = n.author_id
"#;

/// SQLite Novel Repository
pub struct SqliteNovelRepository {
    pool: DbPool,
}

impl SqliteNovelRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct NovelRow {
    id: String,
    title: String,
    author_id: String,
    description: Option<String>,
    cover_image: Option<String>,
    language: String,
    status: String,
    average_rating: f64,
    total_views: i64,
    total_chapters: i64,
    published_at: Option<String>,
    created_at: String,
    updated_at: String,
    deleted_at: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
    author_avatar: Option<String>,
    author_role: Option<String>,
}

impl TryFrom<NovelRow> for NovelWithAuthor {
    type Error = RepositoryError;

    fn try_from(row: NovelRow) -> Result<Self, Self::Error> {
        let author_id = decode_uuid(&row.author_id)?;

        let author = match (row.author_name, row.author_email) {
            (Some(name), Some(email)) => Some(AuthorSummary {
                id: author_id,
                name,
                email,
                avatar: row.author_avatar,
                role: row
                    .author_role
                    .as_deref()
                    .and_then(UserRole::from_str)
                    .unwrap_or_default(),
            }),
            _ => None,
        };

        let novel = NovelRecord {
            id: decode_uuid(&row.id)?,
            title: row.title,
            author_id,
            description: row.description,
            cover_image: row.cover_image,
            language: row.language,
            status: NovelStatus::from_str(&row.status).unwrap_or_default(),
            average_rating: row.average_rating,
            total_views: row.total_views.max(0) as u64,
            total_chapters: row.total_chapters.max(0) as u64,
            published_at: decode_optional_time(row.published_at)?,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
            deleted_at: decode_optional_time(row.deleted_at)?,
        };

        Ok(NovelWithAuthor { novel, author })
    }
}

#[derive(FromRow)]
struct CategoryLinkRow {
    novel_id: String,
    id: String,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: String,
}

#[derive(FromRow)]
struct TagLinkRow {
    novel_id: String,
    id: String,
    name: String,
    slug: String,
    created_at: String,
}

fn sort_column(field: NovelSortField) -> &'static str {
    match field {
        NovelSortField::CreatedAt => "n.created_at",
        NovelSortField::UpdatedAt => "n.updated_at",
        NovelSortField::Title => "n.title",
        NovelSortField::AverageRating => "n.average_rating",
        NovelSortField::TotalViews => "n.total_views",
    }
}

/// 构造 WHERE 子句及其绑定参数
fn filter_clause(filter: &NovelFilter) -> (String, Vec<String>) {
    let mut conditions = vec!["n.deleted_at IS NULL".to_string()];
    let mut binds = Vec::new();

    if let Some(author_id) = filter.author_id {
        conditions.push("n.author_id = ?".to_string());
        binds.push(author_id.to_string());
    }

    if let Some(status) = filter.status {
        conditions.push("n.status = ?".to_string());
        binds.push(status.as_str().to_string());
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        conditions.push("(n.title LIKE ? OR n.description LIKE ?)".to_string());
        let pattern = format!("%{}%", search);
        binds.push(pattern.clone());
        binds.push(pattern);
    }

    if !filter.category_ids.is_empty() {
        conditions.push(format!(
            "n.id IN (SELECT novel_id FROM novel_categories WHERE category_id IN ({}))",
            placeholders(filter.category_ids.len())
        ));
        binds.extend(filter.category_ids.iter().map(Uuid::to_string));
    }

    if !filter.tag_ids.is_empty() {
        conditions.push(format!(
            "n.id IN (SELECT novel_id FROM novel_tags WHERE tag_id IN ({}))",
            placeholders(filter.tag_ids.len())
        ));
        binds.extend(filter.tag_ids.iter().map(Uuid::to_string));
    }

    (conditions.join(" AND "), binds)
}

/// 写入关联行，重复的 ID 只写一次
async fn insert_links(
    conn: &mut SqliteConnection,
    table: &str,
    column: &str,
    novel_id: Uuid,
    ids: &[Uuid],
) -> Result<(), RepositoryError> {
    let sql = format!(
        "INSERT INTO {} (id, novel_id, {}) VALUES (?, ?, ?)",
        table, column
    );

    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if seen.contains(id) {
            continue;
        }
        seen.push(*id);

        sqlx::query(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(novel_id.to_string())
            .bind(id.to_string())
            .execute(&mut *conn)
            .await
            .map_err(db_error)?;
    }

    Ok(())
}

async fn replace_links(
    conn: &mut SqliteConnection,
    table: &str,
    column: &str,
    novel_id: Uuid,
    ids: &[Uuid],
) -> Result<(), RepositoryError> {
    sqlx::query(&format!("DELETE FROM {} WHERE novel_id = ?", table))
        .bind(novel_id.to_string())
        .execute(&mut *conn)
        .await
        .map_err(db_error)?;

    insert_links(conn, table, column, novel_id, ids).await
}

#[async_trait]
impl NovelRepositoryPort for SqliteNovelRepository {
    async fn create(
        &self,
        novel: &NovelRecord,
        category_ids: &[Uuid],
        tag_ids: &[Uuid],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query(
            r#"
            INSERT INTO novels (id, title, author_id, description, cover_image, language, status,
                                average_rating, total_views, total_chapters, published_at,
                                created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(novel.id.to_string())
        .bind(&novel.title)
        .bind(novel.author_id.to_string())
        .bind(&novel.description)
        .bind(&novel.cover_image)
        .bind(&novel.language)
        .bind(novel.status.as_str())
        .bind(novel.average_rating)
        .bind(novel.total_views as i64)
        .bind(novel.total_chapters as i64)
        .bind(novel.published_at.as_ref().map(encode_time))
        .bind(encode_time(&novel.created_at))
        .bind(encode_time(&novel.updated_at))
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        insert_links(&mut tx, "novel_categories", "category_id", novel.id, category_ids).await?;
        insert_links(&mut tx, "novel_tags", "tag_id", novel.id, tag_ids).await?;

        tx.commit().await.map_err(db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<NovelWithAuthor>, RepositoryError> {
        let sql = format!("{} WHERE n.id = ? AND n.deleted_at IS NULL", NOVEL_SELECT);
        let row: Option<NovelRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        row.map(NovelWithAuthor::try_from).transpose()
    }

    async fn find_many(
        &self,
        filter: &NovelFilter,
        sort: NovelSort,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<NovelWithAuthor>, RepositoryError> {
        let (where_clause, binds) = filter_clause(filter);
        // 次级排序保证相同排序键下的顺序稳定
        let sql = format!(
            "{} WHERE {} ORDER BY {} {}, n.id ASC LIMIT ? OFFSET ?",
            NOVEL_SELECT,
            where_clause,
            sort_column(sort.field),
            sort.order.as_sql()
        );

        let mut query = sqlx::query_as::<_, NovelRow>(&sql);
        for value in binds {
            query = query.bind(value);
        }
        let rows = query
            .bind(i64::from(limit))
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(NovelWithAuthor::try_from).collect()
    }

    async fn count(&self, filter: &NovelFilter) -> Result<u64, RepositoryError> {
        let (where_clause, binds) = filter_clause(filter);
        let sql = format!("SELECT COUNT(*) FROM novels n WHERE {}", where_clause);

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in binds {
            query = query.bind(value);
        }
        let total = query.fetch_one(&self.pool).await.map_err(db_error)?;

        Ok(total.max(0) as u64)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &NovelPatch,
        category_ids: Option<&[Uuid]>,
        tag_ids: Option<&[Uuid]>,
    ) -> Result<bool, RepositoryError> {
        let mut assignments = vec!["updated_at = ?"];
        let mut binds = vec![encode_time(&Utc::now())];

        if let Some(title) = &patch.title {
            assignments.push("title = ?");
            binds.push(title.clone());
        }
        if let Some(description) = &patch.description {
            assignments.push("description = ?");
            binds.push(description.clone());
        }
        if let Some(cover_image) = &patch.cover_image {
            assignments.push("cover_image = ?");
            binds.push(cover_image.clone());
        }
        if let Some(language) = &patch.language {
            assignments.push("language = ?");
            binds.push(language.clone());
        }
        if let Some(status) = patch.status {
            assignments.push("status = ?");
            binds.push(status.as_str().to_string());
        }

        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let sql = format!(
            "UPDATE novels SET {} WHERE id = ? AND deleted_at IS NULL",
            assignments.join(", ")
        );
        let mut query = sqlx::query(&sql);
        for value in binds {
            query = query.bind(value);
        }
        let result = query
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(db_error)?;
            return Ok(false);
        }

        if let Some(ids) = category_ids {
            replace_links(&mut tx, "novel_categories", "category_id", id, ids).await?;
        }
        if let Some(ids) = tag_ids {
            replace_links(&mut tx, "novel_tags", "tag_id", id, ids).await?;
        }

        tx.commit().await.map_err(db_error)?;

        Ok(true)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let now = encode_time(&Utc::now());
        let result = sqlx::query(
            "UPDATE novels SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&now)
        .bind(&now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_views(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE novels SET total_views = total_views + 1, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(encode_time(&Utc::now()))
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_total_chapters(&self, id: Uuid) -> Result<Option<u64>, RepositoryError> {
        let total: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE novels
            SET total_chapters = (
                    SELECT COUNT(*) FROM chapters
                    WHERE chapters.novel_id = novels.id AND chapters.deleted_at IS NULL
                ),
                updated_at = ?
            WHERE id = ?
            RETURNING total_chapters
            "#,
        )
        .bind(encode_time(&Utc::now()))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(total.map(|t| t.max(0) as u64))
    }

    async fn update_average_rating(&self, id: Uuid, rating: f64) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE novels SET average_rating = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(rating)
        .bind(encode_time(&Utc::now()))
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_categories(
        &self,
        novel_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CategoryRecord>>, RepositoryError> {
        if novel_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            r#"
            SELECT nc.novel_id, c.id, c.name, c.slug, c.description, c.created_at
            FROM novel_categories nc
            JOIN categories c ON c.id = nc.category_id
            WHERE nc.novel_id IN ({})
            ORDER BY c.name
            "#,
            placeholders(novel_ids.len())
        );
        let mut query = sqlx::query_as::<_, CategoryLinkRow>(&sql);
        for id in novel_ids {
            query = query.bind(id.to_string());
        }
        let rows = query.fetch_all(&self.pool).await.map_err(db_error)?;

        let mut map: HashMap<Uuid, Vec<CategoryRecord>> = HashMap::new();
        for row in rows {
            map.entry(decode_uuid(&row.novel_id)?)
                .or_default()
                .push(CategoryRecord {
                    id: decode_uuid(&row.id)?,
                    name: row.name,
                    slug: row.slug,
                    description: row.description,
                    created_at: decode_time(&row.created_at)?,
                });
        }

        Ok(map)
    }

    async fn find_tags(
        &self,
        novel_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<TagRecord>>, RepositoryError> {
        if novel_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            r#"
            SELECT nt.novel_id, t.id, t.name, t.slug, t.created_at
            FROM novel_tags nt
            JOIN tags t ON t.id = nt.tag_id
            WHERE nt.novel_id IN ({})
            ORDER BY t.name
            "#,
            placeholders(novel_ids.len())
        );
        let mut query = sqlx::query_as::<_, TagLinkRow>(&sql);
        for id in novel_ids {
            query = query.bind(id.to_string());
        }
        let rows = query.fetch_all(&self.pool).await.map_err(db_error)?;

        let mut map: HashMap<Uuid, Vec<TagRecord>> = HashMap::new();
        for row in rows {
            map.entry(decode_uuid(&row.novel_id)?)
                .or_default()
                .push(TagRecord {
                    id: decode_uuid(&row.id)?,
                    name: row.name,
                    slug: row.slug,
                    created_at: decode_time(&row.created_at)?,
                });
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{TaxonomyRepositoryPort, UserRepositoryPort};
    use crate::domain::novel::SortOrder;
    use crate::infrastructure::persistence::sqlite::test_support::{
        category, novel, tag, test_pool, user,
    };
    use crate::infrastructure::persistence::sqlite::{
        SqliteTaxonomyRepository, SqliteUserRepository,
    };

    struct Fixture {
        pool: DbPool,
        repo: SqliteNovelRepository,
        taxonomy: SqliteTaxonomyRepository,
        author_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let pool = test_pool().await;
        let users = SqliteUserRepository::new(pool.clone());
        let author = user("Author", "author@example.com");
        users.create(&author).await.unwrap();

        Fixture {
            repo: SqliteNovelRepository::new(pool.clone()),
            taxonomy: SqliteTaxonomyRepository::new(pool.clone()),
            author_id: author.id,
            pool,
        }
    }

    async fn physical_count(pool: &DbPool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let f = fixture().await;
        let mut record = novel("Tale", f.author_id);
        record.status = NovelStatus::Completed;
        record.description = Some("A story".to_string());
        f.repo.create(&record, &[], &[]).await.unwrap();

        let found = f.repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.novel.title, "Tale");
        assert_eq!(found.novel.author_id, f.author_id);
        assert_eq!(found.novel.status, NovelStatus::Completed);
        assert_eq!(found.novel.language, "vi");
        assert!(found.novel.deleted_at.is_none());

        let author = found.author.unwrap();
        assert_eq!(author.name, "Author");
        assert_eq!(author.email, "author@example.com");
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_rolls_back() {
        let f = fixture().await;
        let record = novel("Orphan", f.author_id);

        let err = f
            .repo
            .create(&record, &[Uuid::new_v4()], &[])
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert_eq!(physical_count(&f.pool, "novels").await, 0);
        assert_eq!(physical_count(&f.pool, "novel_categories").await, 0);
    }

    #[tokio::test]
    async fn test_soft_delete_hides_row() {
        let f = fixture().await;
        let record = novel("Gone", f.author_id);
        f.repo.create(&record, &[], &[]).await.unwrap();

        assert!(f.repo.soft_delete(record.id).await.unwrap());
        assert!(!f.repo.soft_delete(record.id).await.unwrap());
        assert!(f.repo.find_by_id(record.id).await.unwrap().is_none());
        assert_eq!(f.repo.count(&NovelFilter::default()).await.unwrap(), 0);
        assert_eq!(physical_count(&f.pool, "novels").await, 1);
        assert!(!f.repo.increment_views(record.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_increment_views_is_exact() {
        let f = fixture().await;
        let record = novel("Read me", f.author_id);
        f.repo.create(&record, &[], &[]).await.unwrap();

        for _ in 0..5 {
            assert!(f.repo.increment_views(record.id).await.unwrap());
        }

        let found = f.repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.novel.total_views, 5);
    }

    #[tokio::test]
    async fn test_category_and_tag_filters() {
        let f = fixture().await;
        let romance = category("Romance", "romance");
        let fantasy = category("Fantasy", "fantasy");
        let popular = tag("Popular", "popular");
        for c in [&romance, &fantasy] {
            f.taxonomy.create_category(c).await.unwrap();
        }
        f.taxonomy.create_tag(&popular).await.unwrap();

        let a = novel("A", f.author_id);
        let b = novel("B", f.author_id);
        let c = novel("C", f.author_id);
        f.repo.create(&a, &[romance.id], &[popular.id]).await.unwrap();
        f.repo.create(&b, &[fantasy.id], &[]).await.unwrap();
        f.repo.create(&c, &[], &[popular.id]).await.unwrap();

        let titles = |novels: Vec<NovelWithAuthor>| {
            let mut t: Vec<String> = novels.into_iter().map(|n| n.novel.title).collect();
            t.sort();
            t
        };

        // 同一列表内取并集
        let filter = NovelFilter {
            category_ids: vec![romance.id, fantasy.id],
            ..Default::default()
        };
        let found = f.repo.find_many(&filter, NovelSort::default(), 20, 0).await.unwrap();
        assert_eq!(titles(found), vec!["A", "B"]);
        assert_eq!(f.repo.count(&filter).await.unwrap(), 2);

        // 不同列表之间取交集
        let filter = NovelFilter {
            category_ids: vec![romance.id, fantasy.id],
            tag_ids: vec![popular.id],
            ..Default::default()
        };
        let found = f.repo.find_many(&filter, NovelSort::default(), 20, 0).await.unwrap();
        assert_eq!(titles(found), vec!["A"]);
        assert_eq!(f.repo.count(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_search_matches_title_or_description() {
        let f = fixture().await;
        let mut a = novel("Dragon Road", f.author_id);
        a.description = Some("a quiet tale".to_string());
        let mut b = novel("Moonlight", f.author_id);
        b.description = Some("dragons return".to_string());
        let c = novel("Unrelated", f.author_id);
        for n in [&a, &b, &c] {
            f.repo.create(n, &[], &[]).await.unwrap();
        }

        let filter = NovelFilter {
            search: Some("dragon".to_string()),
            ..Default::default()
        };
        assert_eq!(f.repo.count(&filter).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_sort_by_views_with_stable_ties() {
        let f = fixture().await;
        let records: Vec<NovelRecord> = (0..4).map(|i| novel(&format!("N{i}"), f.author_id)).collect();
        for r in &records {
            f.repo.create(r, &[], &[]).await.unwrap();
        }
        for _ in 0..3 {
            f.repo.increment_views(records[2].id).await.unwrap();
        }
        f.repo.increment_views(records[0].id).await.unwrap();

        let sort = NovelSort::desc(NovelSortField::TotalViews);
        let first = f.repo.find_many(&NovelFilter::default(), sort, 10, 0).await.unwrap();
        let views: Vec<u64> = first.iter().map(|n| n.novel.total_views).collect();
        assert_eq!(views, vec![3, 1, 0, 0]);
        assert_eq!(first[0].novel.id, records[2].id);

        let second = f.repo.find_many(&NovelFilter::default(), sort, 10, 0).await.unwrap();
        let ids = |v: &[NovelWithAuthor]| v.iter().map(|n| n.novel.id).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));

        let asc = NovelSort {
            field: NovelSortField::Title,
            order: SortOrder::Asc,
        };
        let page = f.repo.find_many(&NovelFilter::default(), asc, 2, 2).await.unwrap();
        let titles: Vec<&str> = page.iter().map(|n| n.novel.title.as_str()).collect();
        assert_eq!(titles, vec!["N2", "N3"]);
    }

    #[tokio::test]
    async fn test_update_replaces_links() {
        let f = fixture().await;
        let romance = category("Romance", "romance");
        let horror = category("Horror", "horror");
        let short = tag("Short Story", "short-story");
        for c in [&romance, &horror] {
            f.taxonomy.create_category(c).await.unwrap();
        }
        f.taxonomy.create_tag(&short).await.unwrap();

        let record = novel("Shift", f.author_id);
        f.repo.create(&record, &[romance.id], &[short.id]).await.unwrap();

        let patch = NovelPatch {
            title: Some("Shifted".to_string()),
            status: Some(NovelStatus::Hiatus),
            ..Default::default()
        };
        assert!(f
            .repo
            .update(record.id, &patch, Some(&[horror.id]), None)
            .await
            .unwrap());

        let found = f.repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.novel.title, "Shifted");
        assert_eq!(found.novel.status, NovelStatus::Hiatus);
        assert!(found.novel.updated_at >= record.updated_at);

        let categories = f.repo.find_categories(&[record.id]).await.unwrap();
        let slugs: Vec<&str> = categories[&record.id].iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["horror"]);

        // 未提供的标签列表保持不变
        let tags = f.repo.find_tags(&[record.id]).await.unwrap();
        assert_eq!(tags[&record.id].len(), 1);

        assert!(!f
            .repo
            .update(Uuid::new_v4(), &patch, None, None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_update_total_chapters_counts_live_chapters() {
        let f = fixture().await;
        let record = novel("Chaptered", f.author_id);
        f.repo.create(&record, &[], &[]).await.unwrap();

        for (i, deleted) in [(1, None), (2, None), (3, Some("2024-01-01T00:00:00.000000Z"))] {
            sqlx::query(
                "INSERT INTO chapters (id, novel_id, title, content, chapter_number, created_at, updated_at, deleted_at) VALUES (?, ?, 'c', 'body', ?, 't', 't', ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(record.id.to_string())
            .bind(i)
            .bind(deleted)
            .execute(&f.pool)
            .await
            .unwrap();
        }

        assert_eq!(f.repo.update_total_chapters(record.id).await.unwrap(), Some(2));
        assert_eq!(f.repo.update_total_chapters(Uuid::new_v4()).await.unwrap(), None);

        let found = f.repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.novel.total_chapters, 2);
    }

    #[tokio::test]
    async fn test_update_average_rating() {
        let f = fixture().await;
        let record = novel("Rated", f.author_id);
        f.repo.create(&record, &[], &[]).await.unwrap();

        assert!(f.repo.update_average_rating(record.id, 4.5).await.unwrap());
        let found = f.repo.find_by_id(record.id).await.unwrap().unwrap();
        assert!((found.novel.average_rating - 4.5).abs() < f64::EPSILON);
    }
}
