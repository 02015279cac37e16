//! Memory Layer - In-Memory State Management
//!
//! 实现 NoteStore，笔记演示的进程内状态

mod note_store;

pub use note_store::{InMemoryNoteStore, WELCOME_NOTE};
