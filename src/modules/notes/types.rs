use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
  pub title: String,
  pub description: String,
  /// Time of the last write. Reset on every update.
  pub created_on: DateTime<Utc>
}

impl Note {
  pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
    Note {
      title: title.into(),
      description: description.into(),
      created_on: Utc::now()
    }
  }
}

/// Body of `/notes/save` and `/notes/update/:id`. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct NoteForm {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String
}

/// A note paired with the key it is stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditNote {
  pub id: String,
  pub note: Note
}
