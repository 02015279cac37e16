//! Note Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateNote, DeleteNote, UpdateNote};
use crate::application::error::ApplicationError;
use crate::application::ports::{Note, NoteStorePort};

fn require_content(content: &str) -> Result<(), ApplicationError> {
    if content.trim().is_empty() {
        return Err(ApplicationError::validation("Note content cannot be empty"));
    }
    Ok(())
}

/// CreateNote Handler
pub struct CreateNoteHandler {
    note_store: Arc<dyn NoteStorePort>,
}

impl CreateNoteHandler {
    pub fn new(note_store: Arc<dyn NoteStorePort>) -> Self {
        Self { note_store }
    }

    pub fn handle(&self, command: CreateNote) -> Result<Note, ApplicationError> {
        require_content(&command.content)?;
        Ok(self.note_store.create(command.content))
    }
}

/// UpdateNote Handler
pub struct UpdateNoteHandler {
    note_store: Arc<dyn NoteStorePort>,
}

impl UpdateNoteHandler {
    pub fn new(note_store: Arc<dyn NoteStorePort>) -> Self {
        Self { note_store }
    }

    pub fn handle(&self, command: UpdateNote) -> Result<Note, ApplicationError> {
        require_content(&command.content)?;
        Ok(self.note_store.update(command.id, command.content)?)
    }
}

/// DeleteNote Handler
pub struct DeleteNoteHandler {
    note_store: Arc<dyn NoteStorePort>,
}

impl DeleteNoteHandler {
    pub fn new(note_store: Arc<dyn NoteStorePort>) -> Self {
        Self { note_store }
    }

    pub fn handle(&self, command: DeleteNote) -> Result<(), ApplicationError> {
        Ok(self.note_store.delete(command.id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryNoteStore;

    #[test]
    fn test_blank_content_rejected() {
        let store = Arc::new(InMemoryNoteStore::new());
        let create = CreateNoteHandler::new(store.clone());

        let err = create
            .handle(CreateNote {
                content: "   ".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));

        let note = create
            .handle(CreateNote {
                content: "  keep padding  ".to_string(),
            })
            .unwrap();
        assert_eq!(note.content, "  keep padding  ");

        let err = UpdateNoteHandler::new(store.clone())
            .handle(UpdateNote {
                id: note.id,
                content: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[test]
    fn test_missing_note() {
        let store = Arc::new(InMemoryNoteStore::new());
        let err = DeleteNoteHandler::new(store.clone())
            .handle(DeleteNote { id: 42 })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Note", .. }));

        let err = UpdateNoteHandler::new(store)
            .handle(UpdateNote {
                id: 42,
                content: "x".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
