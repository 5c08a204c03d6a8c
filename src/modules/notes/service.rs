use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AppError;
use crate::modules::notes::store::NoteStore;
use crate::modules::notes::types::{EditNote, Note};

/// Note lifecycle operations over a shared [`NoteStore`].
#[derive(Clone, Debug)]
pub struct NoteService {
    store: Arc<NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<(String, Note)> {
        let notes = self.store.list();
        debug!(count = notes.len(), "listing notes");
        notes
    }

    /// Stores a new note and returns its identifier. Empty fields are accepted.
    pub fn create(&self, title: String, description: String) -> String {
        let id = self.store.next_id();
        self.store.put(id.clone(), Note::new(title, description));
        info!(%id, "note created");
        id
    }

    pub fn get(&self, id: &str) -> Result<EditNote, AppError> {
        let note = self.store.get(id).ok_or_else(|| AppError::not_found(id, "edit"))?;
        Ok(EditNote { id: id.to_string(), note })
    }

    pub fn update(&self, id: &str, title: String, description: String) -> Result<Note, AppError> {
        let note = Note::new(title, description);
        self.store
            .replace(id, note.clone())
            .ok_or_else(|| AppError::not_found(id, "update"))?;
        info!(%id, "note updated");
        Ok(note)
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store
            .delete(id)
            .ok_or_else(|| AppError::not_found(id, "delete"))?;
        info!(%id, "note deleted");
        Ok(())
    }
}
