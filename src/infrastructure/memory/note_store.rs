//! In-Memory Note Store Implementation

use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::ports::{Note, NoteError, NoteStorePort};

/// 欢迎笔记内容
pub const WELCOME_NOTE: &str = "Welcome to the notes demo!";

/// 内存笔记存储
pub struct InMemoryNoteStore {
    notes: DashMap<u64, Note>,
    next_id: AtomicU64,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self {
            notes: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// 预置一条 ID 为 1 的欢迎笔记
    pub fn with_welcome_note() -> Self {
        let store = Self::new();
        store.create(WELCOME_NOTE.to_string());
        store
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStorePort for InMemoryNoteStore {
    fn list(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.notes.iter().map(|e| e.value().clone()).collect();
        notes.sort_by_key(|n| n.id);
        notes
    }

    fn get(&self, id: u64) -> Result<Note, NoteError> {
        self.notes
            .get(&id)
            .map(|n| n.clone())
            .ok_or(NoteError::NotFound(id))
    }

    fn create(&self, content: String) -> Note {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let note = Note {
            id,
            content,
            created_at: now,
            updated_at: now,
        };
        self.notes.insert(id, note.clone());
        tracing::debug!(note_id = id, "Note created");
        note
    }

    fn update(&self, id: u64, content: String) -> Result<Note, NoteError> {
        let mut note = self.notes.get_mut(&id).ok_or(NoteError::NotFound(id))?;
        note.content = content;
        note.updated_at = Utc::now();
        tracing::debug!(note_id = id, "Note updated");
        Ok(note.clone())
    }

    fn delete(&self, id: u64) -> Result<(), NoteError> {
        self.notes
            .remove(&id)
            .map(|_| {
                tracing::debug!(note_id = id, "Note deleted");
            })
            .ok_or(NoteError::NotFound(id))
    }
}
