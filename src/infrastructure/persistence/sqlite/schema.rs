//! SQLite Schema - 数据库迁移
//!
//! 所有语句都是幂等的，可在每次启动时执行。

use super::DbPool;

const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            avatar TEXT,
            role TEXT NOT NULL DEFAULT 'reader'
                CHECK (role IN ('reader', 'author', 'admin')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
    ),
    (
        "auth_tokens",
        r#"
        CREATE TABLE IF NOT EXISTS auth_tokens (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            token TEXT NOT NULL UNIQUE,
            type TEXT NOT NULL CHECK (type IN ('access', 'refresh', 'reset')),
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "novels",
        r#"
        CREATE TABLE IF NOT EXISTS novels (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            author_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            description TEXT,
            cover_image TEXT,
            language TEXT NOT NULL DEFAULT 'vi',
            status TEXT NOT NULL DEFAULT 'ongoing'
                CHECK (status IN ('ongoing', 'completed', 'hiatus', 'dropped')),
            average_rating REAL NOT NULL DEFAULT 0,
            total_views INTEGER NOT NULL DEFAULT 0,
            total_chapters INTEGER NOT NULL DEFAULT 0,
            published_at TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
    ),
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "tags",
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            slug TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "novel_categories",
        r#"
        CREATE TABLE IF NOT EXISTS novel_categories (
            id TEXT PRIMARY KEY,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            category_id TEXT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            UNIQUE (novel_id, category_id)
        )
        "#,
    ),
    (
        "novel_tags",
        r#"
        CREATE TABLE IF NOT EXISTS novel_tags (
            id TEXT PRIMARY KEY,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            tag_id TEXT NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            UNIQUE (novel_id, tag_id)
        )
        "#,
    ),
    (
        "chapters",
        r#"
        CREATE TABLE IF NOT EXISTS chapters (
            id TEXT PRIMARY KEY,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            chapter_number INTEGER NOT NULL,
            word_count INTEGER NOT NULL DEFAULT 0,
            reading_time INTEGER NOT NULL DEFAULT 0,
            views INTEGER NOT NULL DEFAULT 0,
            published_at TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
    ),
    (
        "reading_progress",
        r#"
        CREATE TABLE IF NOT EXISTS reading_progress (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            chapter_id TEXT REFERENCES chapters(id) ON DELETE CASCADE,
            last_read_chapter INTEGER NOT NULL DEFAULT 0,
            progress REAL NOT NULL DEFAULT 0,
            last_read_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "user_favorites",
        r#"
        CREATE TABLE IF NOT EXISTS user_favorites (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "collections",
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            description TEXT,
            is_public INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "collection_novels",
        r#"
        CREATE TABLE IF NOT EXISTS collection_novels (
            id TEXT PRIMARY KEY,
            collection_id TEXT NOT NULL REFERENCES collections(id) ON DELETE CASCADE,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            added_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "user_preferences",
        r#"
        CREATE TABLE IF NOT EXISTS user_preferences (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            font_size INTEGER NOT NULL DEFAULT 16,
            theme TEXT NOT NULL DEFAULT 'auto' CHECK (theme IN ('light', 'dark', 'auto')),
            reading_speed INTEGER NOT NULL DEFAULT 200,
            line_height REAL NOT NULL DEFAULT 1.6,
            font_family TEXT NOT NULL DEFAULT 'system',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "bookmarks",
        r#"
        CREATE TABLE IF NOT EXISTS bookmarks (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            chapter_id TEXT NOT NULL REFERENCES chapters(id) ON DELETE CASCADE,
            position INTEGER NOT NULL DEFAULT 0,
            note TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "reading_history",
        r#"
        CREATE TABLE IF NOT EXISTS reading_history (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            chapter_id TEXT NOT NULL REFERENCES chapters(id) ON DELETE CASCADE,
            read_at TEXT NOT NULL,
            reading_time INTEGER NOT NULL DEFAULT 0
        )
        "#,
    ),
    (
        "reviews",
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            title TEXT,
            content TEXT,
            helpful_votes INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
    ),
    (
        "review_votes",
        r#"
        CREATE TABLE IF NOT EXISTS review_votes (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            review_id TEXT NOT NULL REFERENCES reviews(id) ON DELETE CASCADE,
            is_helpful INTEGER NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "comments",
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            chapter_id TEXT NOT NULL REFERENCES chapters(id) ON DELETE CASCADE,
            parent_id TEXT REFERENCES comments(id) ON DELETE CASCADE,
            content TEXT NOT NULL,
            is_moderated INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
    ),
    (
        "user_follows",
        r#"
        CREATE TABLE IF NOT EXISTS user_follows (
            id TEXT PRIMARY KEY,
            follower_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            following_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            UNIQUE (follower_id, following_id),
            CHECK (follower_id <> following_id)
        )
        "#,
    ),
    (
        "notifications",
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            type TEXT NOT NULL CHECK (type IN
                ('new_chapter', 'new_review', 'new_follower', 'novel_completed', 'system')),
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            data TEXT,
            is_read INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "content_flags",
        r#"
        CREATE TABLE IF NOT EXISTS content_flags (
            id TEXT PRIMARY KEY,
            reporter_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            content_type TEXT NOT NULL
                CHECK (content_type IN ('novel', 'chapter', 'comment', 'review')),
            content_id TEXT NOT NULL,
            reason TEXT NOT NULL
                CHECK (reason IN ('spam', 'inappropriate', 'copyright', 'harassment', 'other')),
            description TEXT,
            status TEXT NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'resolved', 'dismissed')),
            moderator_id TEXT REFERENCES users(id) ON DELETE SET NULL,
            moderator_note TEXT,
            created_at TEXT NOT NULL,
            resolved_at TEXT
        )
        "#,
    ),
    (
        "audit_logs",
        r#"
        CREATE TABLE IF NOT EXISTS audit_logs (
            id TEXT PRIMARY KEY,
            admin_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            action TEXT NOT NULL,
            target_type TEXT NOT NULL,
            target_id TEXT NOT NULL,
            old_values TEXT,
            new_values TEXT,
            ip_address TEXT,
            user_agent TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "novel_analytics",
        r#"
        CREATE TABLE IF NOT EXISTS novel_analytics (
            id TEXT PRIMARY KEY,
            novel_id TEXT NOT NULL REFERENCES novels(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            views INTEGER NOT NULL DEFAULT 0,
            unique_readers INTEGER NOT NULL DEFAULT 0,
            average_reading_time INTEGER NOT NULL DEFAULT 0,
            new_favorites INTEGER NOT NULL DEFAULT 0,
            new_reviews INTEGER NOT NULL DEFAULT 0,
            UNIQUE (novel_id, date)
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_novels_author_id ON novels(author_id)",
    "CREATE INDEX IF NOT EXISTS idx_novels_created_at ON novels(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_novel_categories_category_id ON novel_categories(category_id)",
    "CREATE INDEX IF NOT EXISTS idx_novel_tags_tag_id ON novel_tags(tag_id)",
    "CREATE INDEX IF NOT EXISTS idx_chapters_novel_id ON chapters(novel_id)",
    "CREATE INDEX IF NOT EXISTS idx_reviews_novel_id ON reviews(novel_id)",
    "CREATE INDEX IF NOT EXISTS idx_comments_chapter_id ON comments(chapter_id)",
    "CREATE INDEX IF NOT EXISTS idx_user_follows_following_id ON user_follows(following_id)",
    "CREATE INDEX IF NOT EXISTS idx_notifications_user_id ON notifications(user_id)",
];

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    for (table, ddl) in TABLES {
        sqlx::query(*ddl).execute(pool).await?;
        tracing::debug!(table = %table, "Table ready");
    }

    for ddl in INDEXES {
        sqlx::query(*ddl).execute(pool).await?;
    }

    tracing::info!(tables = TABLES.len(), "Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, DatabaseConfig};

    async fn migrated_pool() -> DbPool {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_all_tables_created() {
        let pool = migrated_pool().await;
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 23);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = migrated_pool().await;
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_self_follow_rejected_by_check() {
        let pool = migrated_pool().await;
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at) VALUES ('u1', 'A', 'a@x.io', 'h', 't', 't')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = sqlx::query(
            "INSERT INTO user_follows (id, follower_id, following_id, created_at) VALUES ('f1', 'u1', 'u1', 't')",
        )
        .execute(&pool)
        .await
        .unwrap_err();
        assert!(err.as_database_error().unwrap().is_check_violation());
    }

    #[tokio::test]
    async fn test_hard_delete_cascades_to_children() {
        let pool = migrated_pool().await;
        for sql in [
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at) VALUES ('u1', 'A', 'a@x.io', 'h', 't', 't')",
            "INSERT INTO novels (id, title, author_id, created_at, updated_at) VALUES ('n1', 'N', 'u1', 't', 't')",
            "INSERT INTO chapters (id, novel_id, title, content, chapter_number, created_at, updated_at) VALUES ('c1', 'n1', 'C', 'body', 1, 't', 't')",
            "INSERT INTO comments (id, user_id, chapter_id, content, created_at, updated_at) VALUES ('m1', 'u1', 'c1', 'root', 't', 't')",
            "INSERT INTO comments (id, user_id, chapter_id, parent_id, content, created_at, updated_at) VALUES ('m2', 'u1', 'c1', 'm1', 'reply', 't', 't')",
        ] {
            sqlx::query(sql).execute(&pool).await.unwrap();
        }

        sqlx::query("DELETE FROM comments WHERE id = 'm1'")
            .execute(&pool)
            .await
            .unwrap();
        let replies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(replies, 0);

        sqlx::query("DELETE FROM users WHERE id = 'u1'")
            .execute(&pool)
            .await
            .unwrap();
        let chapters: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chapters")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(chapters, 0);
    }

    #[tokio::test]
    async fn test_preferences_are_one_per_user() {
        let pool = migrated_pool().await;
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at) VALUES ('u1', 'A', 'a@x.io', 'h', 't', 't')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let insert = "INSERT INTO user_preferences (id, user_id, created_at, updated_at) VALUES (?, 'u1', 't', 't')";
        sqlx::query(insert).bind("p1").execute(&pool).await.unwrap();
        let err = sqlx::query(insert).bind("p2").execute(&pool).await.unwrap_err();
        assert!(err.as_database_error().unwrap().is_unique_violation());

        let (font_size, theme): (i64, String) =
            sqlx::query_as("SELECT font_size, theme FROM user_preferences WHERE id = 'p1'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(font_size, 16);
        assert_eq!(theme, "auto");
    }
}
