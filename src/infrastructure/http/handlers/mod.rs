//! HTTP Handlers

mod health;
mod note;
mod novel;
mod taxonomy;
mod user;

pub use health::*;
pub use note::*;
pub use novel::*;
pub use taxonomy::*;
pub use user::*;
