//! 默认数据：分类、标签与管理员账号
//!
//! 已存在的行（按 slug 或邮箱判断）会被跳过，可重复执行。

use chrono::Utc;
use uuid::Uuid;

use crate::application::ports::{
    CategoryRecord, RepositoryError, TagRecord, TaxonomyRepositoryPort, UserRecord,
    UserRepositoryPort,
};
use crate::domain::user::UserRole;

/// (name, slug, description)
const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Romance", "romance", "Romantic stories and love tales"),
    ("Fantasy", "fantasy", "Fantasy and magical stories"),
    ("Sci-Fi", "sci-fi", "Science fiction and futuristic stories"),
    ("Mystery", "mystery", "Mystery and detective stories"),
    ("Horror", "horror", "Horror and thriller stories"),
    ("Drama", "drama", "Dramatic and emotional stories"),
    ("Comedy", "comedy", "Funny and humorous stories"),
    ("Action", "action", "Action and adventure stories"),
    ("Slice of Life", "slice-of-life", "Everyday life stories"),
    ("Historical", "historical", "Historical fiction and period stories"),
];

/// (name, slug)
const DEFAULT_TAGS: &[(&str, &str)] = &[
    ("Completed", "completed"),
    ("Ongoing", "ongoing"),
    ("Popular", "popular"),
    ("Trending", "trending"),
    ("New Release", "new-release"),
    ("Editor's Choice", "editors-choice"),
    ("Short Story", "short-story"),
    ("Series", "series"),
    ("Vietnamese", "vietnamese"),
    ("English", "english"),
    ("Mature Content", "mature-content"),
    ("Young Adult", "young-adult"),
    ("Award Winner", "award-winner"),
    ("Fan Favorite", "fan-favorite"),
    ("Quick Read", "quick-read"),
];

pub const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD_PLACEHOLDER: &str = "CHANGE_THIS_PASSWORD_HASH";

/// 本次写入的行数
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_added: usize,
    pub tags_added: usize,
    pub admin_created: bool,
}

/// 写入默认数据
pub async fn seed_defaults(
    taxonomy: &dyn TaxonomyRepositoryPort,
    users: &dyn UserRepositoryPort,
) -> Result<SeedReport, RepositoryError> {
    let mut report = SeedReport::default();
    let now = Utc::now();

    for (name, slug, description) in DEFAULT_CATEGORIES {
        if taxonomy.find_category_by_slug(slug).await?.is_some() {
            continue;
        }
        taxonomy
            .create_category(&CategoryRecord {
                id: Uuid::new_v4(),
                name: name.to_string(),
                slug: slug.to_string(),
                description: Some(description.to_string()),
                created_at: now,
            })
            .await?;
        tracing::info!(name = %name, "Added category");
        report.categories_added += 1;
    }

    for (name, slug) in DEFAULT_TAGS {
        if taxonomy.find_tag_by_slug(slug).await?.is_some() {
            continue;
        }
        taxonomy
            .create_tag(&TagRecord {
                id: Uuid::new_v4(),
                name: name.to_string(),
                slug: slug.to_string(),
                created_at: now,
            })
            .await?;
        tracing::info!(name = %name, "Added tag");
        report.tags_added += 1;
    }

    if users.find_by_email(ADMIN_EMAIL).await?.is_none() {
        let admin = UserRecord {
            id: Uuid::new_v4(),
            name: "Admin User".to_string(),
            email: ADMIN_EMAIL.to_string(),
            password_hash: ADMIN_PASSWORD_PLACEHOLDER.to_string(),
            avatar: None,
            role: UserRole::Admin,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        match users.create(&admin).await {
            Ok(()) => {
                tracing::info!(email = ADMIN_EMAIL, "Created admin user");
                tracing::warn!("Admin password hash is a placeholder and must be changed");
                report.admin_created = true;
            }
            // 软删除的管理员仍占用该邮箱
            Err(RepositoryError::Duplicate(_)) => {
                tracing::warn!(email = ADMIN_EMAIL, "Admin email is taken by a deleted account");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
