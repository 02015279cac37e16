//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod follow_commands;
mod note_commands;
mod novel_commands;
mod taxonomy_commands;
mod user_commands;

pub mod handlers;

pub use follow_commands::*;
pub use note_commands::*;
pub use novel_commands::*;
pub use taxonomy_commands::*;
pub use user_commands::*;
