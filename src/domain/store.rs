//! In-memory dual-index link store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::snapshot::Snapshot;

/// Concurrent bidirectional store mapping long URLs to short IDs and back.
///
/// Both maps are guarded by a single reader/writer lock and kept exact
/// inverses of each other: every `(url, id)` entry in the forward map has a
/// matching `(id, url)` entry in the backward map, and the maps are always
/// the same size.
///
/// IDs are lowercase hex encodings of the allocation sequence number (entry
/// count at allocation time, plus one). The first allocated ID is `"1"`, the
/// sixteenth `"10"`. IDs are never reused; nothing is ever deleted.
///
/// Mutations set a dirty flag consumed by the snapshot worker. A generation
/// counter lets the worker clear the flag afterwards without erasing changes
/// that raced with the file write.
pub struct LinkStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    url_to_id: HashMap<String, String>,
    id_to_url: HashMap<String, String>,
    dirty: bool,
    generation: u64,
}

impl LinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Looks up the long URL for a short ID. Read-only.
    pub fn lookup(&self, id: &str) -> Option<String> {
        let inner = self.inner.read().expect("link store lock poisoned");
        inner.id_to_url.get(id).cloned()
    }

    /// Returns the existing ID for a URL, or allocates the next one.
    ///
    /// The URL is used verbatim as the key; no validation or normalization
    /// happens here, and the empty string is as valid as any other input.
    ///
    /// The fast path only takes the shared lock. On a miss the exclusive
    /// lock is taken and existence re-checked before allocating, so two
    /// concurrent callers with the same unseen URL converge on a single ID.
    pub fn get_or_create_id(&self, url: &str) -> String {
        {
            let inner = self.inner.read().expect("link store lock poisoned");
            if let Some(id) = inner.url_to_id.get(url) {
                return id.clone();
            }
        }

        let mut inner = self.inner.write().expect("link store lock poisoned");

        // Another writer may have allocated between the two locks.
        if let Some(id) = inner.url_to_id.get(url) {
            return id.clone();
        }

        let id = format!("{:x}", inner.url_to_id.len() + 1);
        inner.url_to_id.insert(url.to_string(), id.clone());
        inner.id_to_url.insert(id.clone(), url.to_string());
        inner.dirty = true;
        inner.generation += 1;

        id
    }

    /// Number of stored link pairs.
    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("link store lock poisoned");
        inner.url_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether there are changes not yet persisted.
    pub fn is_dirty(&self) -> bool {
        let inner = self.inner.read().expect("link store lock poisoned");
        inner.dirty
    }

    /// Clones the current contents for persistence, under the shared lock.
    ///
    /// Returns the generation observed at copy time; pass it to
    /// [`LinkStore::mark_clean`] once the copy has been durably written.
    pub fn export(&self) -> (Snapshot, u64) {
        let inner = self.inner.read().expect("link store lock poisoned");
        let snapshot = Snapshot {
            url_to_id: inner.url_to_id.clone(),
            id_to_url: inner.id_to_url.clone(),
        };
        (snapshot, inner.generation)
    }

    /// Clears the dirty flag if no mutation happened since `generation`.
    ///
    /// A store that changed while its previous export was being written
    /// stays dirty, so the next persist cycle picks the change up.
    pub fn mark_clean(&self, generation: u64) {
        let mut inner = self.inner.write().expect("link store lock poisoned");
        if inner.generation == generation {
            inner.dirty = false;
        }
    }

    /// Replaces the entire contents with a loaded snapshot.
    ///
    /// Both maps are swapped in one critical section; the result counts as
    /// persisted state, so the dirty flag is cleared.
    pub fn replace(&self, snapshot: Snapshot) {
        let mut inner = self.inner.write().expect("link store lock poisoned");
        inner.url_to_id = snapshot.url_to_id;
        inner.id_to_url = snapshot.id_to_url;
        inner.dirty = false;
        inner.generation += 1;
    }
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn assert_inverse(store: &LinkStore) {
        let (snapshot, _) = store.export();
        assert_eq!(snapshot.url_to_id.len(), snapshot.id_to_url.len());
        for (url, id) in &snapshot.url_to_id {
            assert_eq!(snapshot.id_to_url.get(id), Some(url));
        }
    }

    #[test]
    fn test_sequential_id_assignment() {
        let store = LinkStore::new();

        assert_eq!(store.get_or_create_id("https://a.test"), "1");
        assert_eq!(store.get_or_create_id("https://b.test"), "2");
        assert_eq!(store.get_or_create_id("https://c.test"), "3");

        assert_inverse(&store);
    }

    #[test]
    fn test_ids_are_lowercase_hex() {
        let store = LinkStore::new();

        let mut last = String::new();
        for n in 0..16 {
            last = store.get_or_create_id(&format!("https://site{n}.test"));
        }

        assert_eq!(last, "10");
        assert_eq!(store.len(), 16);
        assert_inverse(&store);
    }

    #[test]
    fn test_idempotent_allocation() {
        let store = LinkStore::new();

        let first = store.get_or_create_id("https://example.com");
        let second = store.get_or_create_id("https://example.com");

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_round_trip() {
        let store = LinkStore::new();

        let id = store.get_or_create_id("https://example.com/page");

        assert_eq!(
            store.lookup(&id),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn test_lookup_miss_has_no_side_effects() {
        let store = LinkStore::new();

        assert_eq!(store.lookup("nonexistent"), None);
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_empty_url_is_allocated() {
        let store = LinkStore::new();

        let id = store.get_or_create_id("");

        assert_eq!(id, "1");
        assert_eq!(store.lookup(&id), Some(String::new()));
    }

    #[test]
    fn test_dirty_flag_lifecycle() {
        let store = LinkStore::new();
        assert!(!store.is_dirty());

        store.get_or_create_id("https://a.test");
        assert!(store.is_dirty());

        let (_, generation) = store.export();
        store.mark_clean(generation);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_stale_generation_does_not_clear_dirty() {
        let store = LinkStore::new();

        store.get_or_create_id("https://a.test");
        let (_, generation) = store.export();

        // A mutation lands while the export is being written out.
        store.get_or_create_id("https://b.test");

        store.mark_clean(generation);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let store = LinkStore::new();
        store.get_or_create_id("https://old.test");

        let mut snapshot = Snapshot::default();
        snapshot
            .url_to_id
            .insert("https://a.test".to_string(), "1".to_string());
        snapshot
            .url_to_id
            .insert("https://b.test".to_string(), "2".to_string());
        snapshot
            .id_to_url
            .insert("1".to_string(), "https://a.test".to_string());
        snapshot
            .id_to_url
            .insert("2".to_string(), "https://b.test".to_string());
        store.replace(snapshot);

        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("1"), Some("https://a.test".to_string()));
        assert_eq!(store.lookup("old"), None);
        assert!(!store.is_dirty());

        // Numbering continues from the loaded entry count.
        assert_eq!(store.get_or_create_id("https://c.test"), "3");
    }

    #[test]
    fn test_concurrent_allocation_same_url() {
        let store = Arc::new(LinkStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.get_or_create_id("https://contended.test"))
            })
            .collect();

        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(ids.iter().all(|id| id == "1"));
        assert_eq!(store.len(), 1);
        assert_inverse(&store);
    }

    #[test]
    fn test_concurrent_allocation_distinct_urls() {
        let store = Arc::new(LinkStore::new());

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.get_or_create_id(&format!("https://site{n}.test")))
            })
            .collect();

        let mut ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 16);
        assert_eq!(store.len(), 16);
        assert_inverse(&store);
    }
}
