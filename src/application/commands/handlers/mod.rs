//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod follow_handlers;
mod note_handlers;
mod novel_handlers;
mod taxonomy_handlers;
mod user_handlers;

pub use follow_handlers::*;
pub use note_handlers::*;
pub use novel_handlers::*;
pub use taxonomy_handlers::*;
pub use user_handlers::*;
