//! Persistence of the course book as a single JSON blob under a fixed key.

use hashbrown::HashMap;

use crate::*;

pub const STORAGE_KEY: &str = "grid-golf-courses";

/// String key/value storage such as the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-process store, also handy for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

impl CourseBook {
    /// Reads the stored book, anything unreadable starts over with an empty one.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(json) = store.get(STORAGE_KEY) else {
            return Self::new();
        };

        match serde_json::from_str(&json) {
            Ok(book) => book,
            Err(err) => {
                log::warn!("Could not read stored courses, starting fresh: {err}");
                Self::new()
            }
        }
    }

    /// Rewrites the whole stored book. An empty book is never written.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        store.set(STORAGE_KEY, serde_json::to_string(self)?);
        Ok(())
    }
}
