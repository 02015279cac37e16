//! SQLite Persistence - SQLite 数据库持久化实现

mod codec;
mod database;
mod follow_repo;
mod novel_repo;
mod schema;
mod seed;
mod taxonomy_repo;
mod user_repo;

#[cfg(test)]
pub(crate) mod test_support;

pub use database::*;
pub use follow_repo::*;
pub use novel_repo::*;
pub use schema::run_migrations;
pub use seed::{seed_defaults, SeedReport, ADMIN_EMAIL};
pub use taxonomy_repo::*;
pub use user_repo::SqliteUserRepository;
