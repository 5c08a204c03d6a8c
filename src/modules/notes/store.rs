use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::modules::notes::types::Note;

pub const SEED_ID: &str = "0";

/// In-memory note collection keyed by stringified integers.
///
/// Keys come from a counter that only ever grows, so a deleted key is never
/// handed out again for the lifetime of the store.
#[derive(Debug)]
pub struct NoteStore {
    inner: RwLock<HashMap<String, Note>>,
    counter: AtomicU64,
}

impl NoteStore {
    pub fn new() -> Self {
        NoteStore {
            inner: RwLock::new(HashMap::new()),
            counter: AtomicU64::new(0),
        }
    }

    /// Store holding the default note under key `"0"`. The seed does not
    /// consume the counter, so the first generated key is `"1"`.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.put(
            SEED_ID.to_string(),
            Note::new("text/template", "Template generates textual output"),
        );
        store
    }

    pub fn next_id(&self) -> String {
        (self.counter.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    pub fn list(&self) -> Vec<(String, Note)> {
        let map = self.inner.read();
        map.iter().map(|(id, note)| (id.clone(), note.clone())).collect()
    }

    pub fn get(&self, id: &str) -> Option<Note> {
        let map = self.inner.read();
        map.get(id).cloned()
    }

    pub fn put(&self, id: String, note: Note) {
        let mut map = self.inner.write();
        map.insert(id, note);
    }

    /// Overwrites an existing entry, returning the previous note.
    /// `None` when `id` is absent; nothing is inserted in that case.
    pub fn replace(&self, id: &str, note: Note) -> Option<Note> {
        let mut map = self.inner.write();
        map.get_mut(id).map(|slot| std::mem::replace(slot, note))
    }

    pub fn delete(&self, id: &str) -> Option<Note> {
        let mut map = self.inner.write();
        map.remove(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_default_note() {
        let store = NoteStore::seeded();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(SEED_ID).unwrap().title, "text/template");
    }

    #[test]
    fn ids_are_monotonic_and_skip_the_seed() {
        let store = NoteStore::seeded();
        assert_eq!(store.next_id(), "1");
        assert_eq!(store.next_id(), "2");
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = NoteStore::new();
        let id = store.next_id();
        store.put(id.clone(), Note::new("a", "b"));
        store.delete(&id).unwrap();
        assert_ne!(store.next_id(), id);
    }

    #[test]
    fn replace_and_delete_require_presence() {
        let store = NoteStore::new();
        assert!(store.replace("9", Note::new("x", "y")).is_none());
        assert!(store.delete("9").is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn put_overwrites() {
        let store = NoteStore::new();
        store.put("1".into(), Note::new("first", ""));
        store.put("1".into(), Note::new("second", ""));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").unwrap().title, "second");
    }

    #[test]
    fn concurrent_ids_are_distinct() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let store = Arc::new(NoteStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || (0..100).map(|_| store.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
