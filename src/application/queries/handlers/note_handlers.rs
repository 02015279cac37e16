//! Note Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{Note, NoteStorePort};
use crate::application::queries::{GetNote, ListNotes};

/// GetNote Handler
pub struct GetNoteHandler {
    note_store: Arc<dyn NoteStorePort>,
}

impl GetNoteHandler {
    pub fn new(note_store: Arc<dyn NoteStorePort>) -> Self {
        Self { note_store }
    }

    pub fn handle(&self, query: GetNote) -> Result<Note, ApplicationError> {
        Ok(self.note_store.get(query.id)?)
    }
}

/// ListNotes Handler
pub struct ListNotesHandler {
    note_store: Arc<dyn NoteStorePort>,
}

impl ListNotesHandler {
    pub fn new(note_store: Arc<dyn NoteStorePort>) -> Self {
        Self { note_store }
    }

    pub fn handle(&self, _query: ListNotes) -> Vec<Note> {
        self.note_store.list()
    }
}
