//! 测试夹具：内存数据库与样例记录

use chrono::Utc;
use uuid::Uuid;

use super::{create_pool, run_migrations, DatabaseConfig, DbPool};
use crate::application::ports::{CategoryRecord, NovelRecord, TagRecord, UserRecord};
use crate::domain::novel::{NovelStatus, DEFAULT_LANGUAGE};
use crate::domain::user::UserRole;

/// 已完成迁移的单连接内存数据库
pub(crate) async fn test_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub(crate) fn user(name: &str, email: &str) -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        avatar: None,
        role: UserRole::Reader,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

pub(crate) fn novel(title: &str, author_id: Uuid) -> NovelRecord {
    let now = Utc::now();
    NovelRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author_id,
        description: None,
        cover_image: None,
        language: DEFAULT_LANGUAGE.to_string(),
        status: NovelStatus::Ongoing,
        average_rating: 0.0,
        total_views: 0,
        total_chapters: 0,
        published_at: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

pub(crate) fn category(name: &str, slug: &str) -> CategoryRecord {
    CategoryRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        created_at: Utc::now(),
    }
}

pub(crate) fn tag(name: &str, slug: &str) -> TagRecord {
    TagRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
        created_at: Utc::now(),
    }
}
