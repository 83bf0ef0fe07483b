//! Per-kind ordered id index.

use crate::error::CoreResult;
use crate::keys;
use talentdb_storage::KvBackend;

/// The ordered id list of one entity kind.
///
/// Stored as a single JSON array under `i:<kind>`, in insertion order,
/// which is also the default listing order. The load/store cycle of an
/// append or remove relies on the backend serializing writes to the
/// index key.
pub(crate) struct KindIndex<'a> {
    backend: &'a dyn KvBackend,
    kind: &'static str,
}

impl<'a> KindIndex<'a> {
    pub(crate) fn new(backend: &'a dyn KvBackend, kind: &'static str) -> Self {
        Self { backend, kind }
    }

    /// Reads the full id list; an absent index is empty.
    pub(crate) fn load(&self) -> CoreResult<Vec<String>> {
        match self.backend.get(&keys::index(self.kind))? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the id list wholesale.
    pub(crate) fn store(&self, ids: &[String]) -> CoreResult<()> {
        let bytes = serde_json::to_vec(ids)?;
        self.backend.put(&keys::index(self.kind), &bytes)?;
        Ok(())
    }

    /// Appends an id to the tail unless it is already present.
    pub(crate) fn append(&self, id: &str) -> CoreResult<()> {
        let mut ids = self.load()?;
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
            self.store(&ids)?;
        }
        Ok(())
    }

    /// Removes an id; returns whether it was present.
    pub(crate) fn remove(&self, id: &str) -> CoreResult<bool> {
        let mut ids = self.load()?;
        let before = ids.len();
        ids.retain(|existing| existing != id);
        if ids.len() == before {
            return Ok(false);
        }
        self.store(&ids)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentdb_storage::InMemoryBackend;

    #[test]
    fn absent_index_is_empty() {
        let backend = InMemoryBackend::new();
        let index = KindIndex::new(&backend, "note");
        assert!(index.load().unwrap().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let backend = InMemoryBackend::new();
        let index = KindIndex::new(&backend, "note");
        index.append("b").unwrap();
        index.append("a").unwrap();
        index.append("c").unwrap();
        assert_eq!(index.load().unwrap(), vec!["b", "a", "c"]);
    }

    #[test]
    fn append_is_duplicate_safe() {
        let backend = InMemoryBackend::new();
        let index = KindIndex::new(&backend, "note");
        index.append("a").unwrap();
        index.append("a").unwrap();
        assert_eq!(index.load().unwrap(), vec!["a"]);
    }

    #[test]
    fn remove_reports_presence() {
        let backend = InMemoryBackend::new();
        let index = KindIndex::new(&backend, "note");
        index.append("a").unwrap();
        assert!(index.remove("a").unwrap());
        assert!(!index.remove("a").unwrap());
        assert!(index.load().unwrap().is_empty());
    }

    #[test]
    fn kinds_are_isolated() {
        let backend = InMemoryBackend::new();
        KindIndex::new(&backend, "note").append("a").unwrap();
        assert!(KindIndex::new(&backend, "task").load().unwrap().is_empty());
    }
}
