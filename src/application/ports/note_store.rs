//! Note Store Port - 笔记演示存储
//!
//! 定义笔记存储的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Note Store 错误
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Note not found: {0}")]
    NotFound(u64),
}

/// 笔记
#[derive(Debug, Clone)]
pub struct Note {
    pub id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Note Store Port
///
/// 所有状态存储在内存中，进程重启后丢失
pub trait NoteStorePort: Send + Sync {
    /// 按 ID 升序返回全部笔记
    fn list(&self) -> Vec<Note>;

    /// 获取笔记
    fn get(&self, id: u64) -> Result<Note, NoteError>;

    /// 创建笔记并分配新的 ID
    fn create(&self, content: String) -> Note;

    /// 替换笔记内容
    fn update(&self, id: u64, content: String) -> Result<Note, NoteError>;

    /// 删除笔记
    fn delete(&self, id: u64) -> Result<(), NoteError>;
}
