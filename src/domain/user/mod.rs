//! User Context - 用户限界上下文

mod value_objects;

pub use value_objects::UserRole;
