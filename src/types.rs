use crate::modules::notes::service::NoteService;

#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
}

impl AppState {
    pub fn new(notes: NoteService) -> Self {
        Self { notes }
    }
}
