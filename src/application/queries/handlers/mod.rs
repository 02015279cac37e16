//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod note_handlers;
mod novel_handlers;
mod taxonomy_handlers;
mod user_handlers;

pub use note_handlers::*;
pub use novel_handlers::*;
pub use taxonomy_handlers::*;
pub use user_handlers::*;
