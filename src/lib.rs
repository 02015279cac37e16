//! NovelHub - 小说阅读平台 REST 后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 连载状态、排序
//! - User Context: 用户角色
//! - Social: 关注关系、分页与 slug
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Novel/User/Taxonomy/Follow Repositories, NoteStore）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 笔记演示的内存存储
//! - Persistence: SQLite 存储、迁移与默认数据

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use config::{load_config, AppConfig};
