//! Generic entity store: CRUD, pagination, seeding, mutation.

use crate::entity::cursor::{page_ids, Cursor, Page};
use crate::entity::descriptor::Entity;
use crate::entity::index::KindIndex;
use crate::error::{CoreError, CoreResult};
use crate::keys;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::sync::Arc;
use talentdb_storage::KvBackend;
use tracing::{debug, info};

/// Page size used when the caller does not pass a limit.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Hard ceiling for a single page.
pub const MAX_PAGE_SIZE: usize = 1000;

/// A typed store of one entity kind over a key-value backend.
///
/// `EntityStore<T>` is parameterized by the [`Entity`] descriptor and
/// holds an explicit backend handle - there is no process-wide store,
/// tests substitute an in-memory backend freely.
///
/// Records are encoded as JSON. Every read decodes a fresh copy, so
/// values returned from different calls never alias.
///
/// # Atomicity
///
/// `patch` and `mutate` are read-modify-write cycles. They are atomic
/// for a single id only because the backend serializes writes per key
/// (see [`KvBackend`]); the store takes no locks of its own. Nothing is
/// atomic across keys: the record write and the index write of `create`
/// or `delete` are independent, and listing tolerates the gap by
/// skipping indexed ids whose record is gone.
///
/// # Example
///
/// ```rust,ignore
/// let backend: Arc<dyn KvBackend> = Arc::new(InMemoryBackend::new());
/// let vacancies = EntityStore::<Vacancy>::new(Arc::clone(&backend));
///
/// vacancies.ensure_seed()?;
/// let page = vacancies.list(None, Some(20))?;
/// ```
pub struct EntityStore<T: Entity> {
    backend: Arc<dyn KvBackend>,
    _marker: PhantomData<T>,
}

impl<T: Entity> EntityStore<T> {
    /// Creates a store for kind `T` over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self {
            backend,
            _marker: PhantomData,
        }
    }

    /// Returns the backend handle this store was built over.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn KvBackend> {
        &self.backend
    }

    fn index(&self) -> KindIndex<'_> {
        KindIndex::new(self.backend.as_ref(), T::KIND)
    }

    fn read_raw(&self, id: &str) -> CoreResult<Option<T>> {
        match self.backend.get(&keys::record(T::KIND, id))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn write_raw(&self, record: &T) -> CoreResult<()> {
        let bytes = serde_json::to_vec(record)?;
        self.backend.put(&keys::record(T::KIND, record.id()), &bytes)?;
        Ok(())
    }

    /// Returns whether a record with `id` exists.
    ///
    /// Absence is not an error; only store I/O can fail here.
    pub fn exists(&self, id: &str) -> CoreResult<bool> {
        Ok(self.backend.get(&keys::record(T::KIND, id))?.is_some())
    }

    /// Returns the record with `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record exists under that id.
    pub fn get(&self, id: &str) -> CoreResult<T> {
        self.read_raw(id)?
            .ok_or_else(|| CoreError::not_found(T::KIND, id))
    }

    /// Stores a new record and appends its id to the kind's index tail,
    /// so insertion order is the default listing order.
    ///
    /// Returns the stored record.
    ///
    /// # Errors
    ///
    /// `Conflict` if the id is already present.
    pub fn create(&self, record: T) -> CoreResult<T> {
        let id = record.id().to_string();
        if self.exists(&id)? {
            return Err(CoreError::conflict(T::KIND, id));
        }
        self.write_raw(&record)?;
        self.index().append(&id)?;
        debug!(kind = T::KIND, id = %id, "created entity");
        Ok(record)
    }

    /// Shallow-merges the partial's top-level fields into the existing
    /// record and persists the result.
    ///
    /// Fields absent from the partial keep their stored value; the
    /// merge introduces no field that neither side has. The `id` field
    /// cannot be overridden.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record exists under that id; a codec error if
    /// the merged object no longer decodes as `T`.
    pub fn patch(&self, id: &str, partial: &Map<String, Value>) -> CoreResult<T> {
        let current = self.get(id)?;
        let mut merged = serde_json::to_value(&current)?;
        let Some(fields) = merged.as_object_mut() else {
            return Err(CoreError::validation(format!(
                "{} record is not a JSON object",
                T::KIND
            )));
        };
        for (key, value) in partial {
            if key == "id" {
                continue;
            }
            fields.insert(key.clone(), value.clone());
        }
        let updated: T = serde_json::from_value(merged)?;
        self.write_raw(&updated)?;
        debug!(kind = T::KIND, id = %id, "patched entity");
        Ok(updated)
    }

    /// Read-transform-write for updates that depend on current state,
    /// such as appending to an embedded list.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record exists under that id.
    pub fn mutate(&self, id: &str, f: impl FnOnce(T) -> T) -> CoreResult<T> {
        let current = self.get(id)?;
        let updated = f(current);
        self.write_raw(&updated)?;
        debug!(kind = T::KIND, id = %id, "mutated entity");
        Ok(updated)
    }

    /// Removes the record and its index entry.
    ///
    /// Returns whether anything was deleted; repeat calls return
    /// `false`, not an error.
    pub fn delete(&self, id: &str) -> CoreResult<bool> {
        let removed = self.backend.delete(&keys::record(T::KIND, id))?;
        self.index().remove(id)?;
        if removed {
            debug!(kind = T::KIND, id = %id, "deleted entity");
        }
        Ok(removed)
    }

    /// Lists records in index order after `cursor`.
    ///
    /// The limit is clamped to `1..=`[`MAX_PAGE_SIZE`], defaulting to
    /// [`DEFAULT_PAGE_SIZE`]. The returned cursor is `None` at end of
    /// index. Indexed ids whose record vanished under a concurrent
    /// delete are skipped; listing is a lock-free snapshot, not an
    /// isolated read.
    pub fn list(&self, cursor: Option<&Cursor>, limit: Option<usize>) -> CoreResult<Page<T>> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let ids = self.index().load()?;
        let (page, next_cursor) = page_ids(&ids, cursor, limit);

        let mut items = Vec::with_capacity(page.len());
        for id in &page {
            if let Some(record) = self.read_raw(id)? {
                items.push(record);
            }
        }
        Ok(Page { items, next_cursor })
    }

    /// Writes the kind's seed records and index once per store lifetime.
    ///
    /// The first call on a cold store writes every seed record, merges
    /// the seed ids into the kind's index, and then writes the seed
    /// flag; later calls see the flag and do nothing. Ids already in
    /// the index - records created before the first listing triggered
    /// seeding - keep their position, and seed ids are appended after
    /// them. Racing calls cannot duplicate entries: seed ids are fixed
    /// and the merge is duplicate-safe, so the writes are idempotent
    /// and the flag makes the race first-writer-wins.
    pub fn ensure_seed(&self) -> CoreResult<()> {
        let flag_key = keys::seed_flag(T::KIND);
        if self.backend.get(&flag_key)?.is_some() {
            return Ok(());
        }

        let seed = T::seed();
        if !seed.is_empty() {
            for record in &seed {
                self.write_raw(record)?;
            }
            let mut ids = self.index().load()?;
            for record in &seed {
                let id = record.id();
                if !ids.iter().any(|existing| existing == id) {
                    ids.push(id.to_string());
                }
            }
            self.index().store(&ids)?;
            info!(kind = T::KIND, count = seed.len(), "seeded entity store");
        }
        self.backend.put(&flag_key, b"1")?;
        Ok(())
    }

    /// Returns the number of ids in the kind's index.
    pub fn count(&self) -> CoreResult<usize> {
        Ok(self.index().load()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use talentdb_storage::InMemoryBackend;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        title: String,
        pinned: bool,
    }

    impl Entity for Note {
        const KIND: &'static str = "note";
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Tag {
        id: String,
        label: String,
    }

    impl Entity for Tag {
        const KIND: &'static str = "tag";
        fn id(&self) -> &str {
            &self.id
        }
        fn seed() -> Vec<Self> {
            vec![
                Tag {
                    id: "t1".into(),
                    label: "urgent".into(),
                },
                Tag {
                    id: "t2".into(),
                    label: "later".into(),
                },
            ]
        }
    }

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: id.into(),
            title: title.into(),
            pinned: false,
        }
    }

    fn store() -> EntityStore<Note> {
        EntityStore::new(Arc::new(InMemoryBackend::new()))
    }

    #[test]
    fn create_then_exists_and_get() {
        let notes = store();
        let created = notes.create(note("n1", "first")).unwrap();
        assert!(notes.exists("n1").unwrap());
        assert_eq!(notes.get("n1").unwrap(), created);
    }

    #[test]
    fn create_conflict_on_existing_id() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();
        let err = notes.create(note("n1", "again")).unwrap_err();
        assert!(matches!(err, CoreError::Conflict { .. }));
    }

    #[test]
    fn get_absent_is_not_found() {
        let notes = store();
        let err = notes.get("nope").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert!(!notes.exists("nope").unwrap());
    }

    #[test]
    fn get_returns_independent_copies() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();
        let mut a = notes.get("n1").unwrap();
        a.title = "mutated locally".into();
        assert_eq!(notes.get("n1").unwrap().title, "first");
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();

        let partial = json!({ "pinned": true });
        let updated = notes
            .patch("n1", partial.as_object().unwrap())
            .unwrap();

        assert!(updated.pinned);
        assert_eq!(updated.title, "first");
    }

    #[test]
    fn patch_cannot_override_id() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();

        let partial = json!({ "id": "hijacked", "title": "renamed" });
        let updated = notes.patch("n1", partial.as_object().unwrap()).unwrap();

        assert_eq!(updated.id, "n1");
        assert_eq!(updated.title, "renamed");
        assert!(!notes.exists("hijacked").unwrap());
    }

    #[test]
    fn patch_absent_is_not_found() {
        let notes = store();
        let partial = json!({ "title": "x" });
        let err = notes.patch("nope", partial.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn mutate_sees_current_state() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();
        let updated = notes
            .mutate("n1", |mut n| {
                n.title.push_str(" and more");
                n
            })
            .unwrap();
        assert_eq!(updated.title, "first and more");
        assert_eq!(notes.get("n1").unwrap().title, "first and more");
    }

    #[test]
    fn delete_is_idempotent() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();
        assert!(notes.delete("n1").unwrap());
        assert!(!notes.delete("n1").unwrap());
        assert!(!notes.exists("n1").unwrap());
    }

    #[test]
    fn delete_detaches_from_index() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();
        notes.create(note("n2", "second")).unwrap();
        notes.delete("n1").unwrap();

        let page = notes.list(None, Some(10)).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n2"]);
    }

    #[test]
    fn list_pages_in_insertion_order() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();
        notes.create(note("n2", "second")).unwrap();

        let first = notes.list(None, Some(1)).unwrap();
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].id, "n1");
        let cursor = first.next_cursor.expect("expected a second page");

        let second = notes.list(Some(&cursor), Some(1)).unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].id, "n2");
        assert!(second.next_cursor.is_none());
    }

    #[test]
    fn list_clamps_limit_to_at_least_one() {
        let notes = store();
        notes.create(note("n1", "first")).unwrap();
        let page = notes.list(None, Some(0)).unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn ensure_seed_is_idempotent() {
        let tags: EntityStore<Tag> = EntityStore::new(Arc::new(InMemoryBackend::new()));
        for _ in 0..3 {
            tags.ensure_seed().unwrap();
        }
        assert_eq!(tags.count().unwrap(), 2);
        let page = tags.list(None, Some(10)).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "t1");
    }

    #[test]
    fn ensure_seed_without_seed_data_is_a_noop() {
        let notes = store();
        notes.ensure_seed().unwrap();
        assert_eq!(notes.count().unwrap(), 0);
    }

    #[test]
    fn seeding_keeps_records_created_before_it() {
        let tags: EntityStore<Tag> = EntityStore::new(Arc::new(InMemoryBackend::new()));
        tags.create(Tag {
            id: "t0".into(),
            label: "early".into(),
        })
        .unwrap();

        tags.ensure_seed().unwrap();

        let page = tags.list(None, Some(10)).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t0", "t1", "t2"]);
    }

    #[test]
    fn seeded_store_still_accepts_creates() {
        let backend: Arc<dyn KvBackend> = Arc::new(InMemoryBackend::new());
        let tags: EntityStore<Tag> = EntityStore::new(Arc::clone(&backend));
        tags.ensure_seed().unwrap();
        tags.create(Tag {
            id: "t3".into(),
            label: "new".into(),
        })
        .unwrap();
        assert_eq!(tags.count().unwrap(), 3);
    }

    proptest! {
        /// Paging over all pages yields exactly the set of existing ids,
        /// with no duplicates, for any page size.
        #[test]
        fn listing_covers_every_existing_id(count in 0usize..30, limit in 1usize..8) {
            let notes = store();
            for i in 0..count {
                notes.create(note(&format!("n{i}"), "body")).unwrap();
            }

            let mut seen = Vec::new();
            let mut cursor: Option<Cursor> = None;
            loop {
                let page = notes.list(cursor.as_ref(), Some(limit)).unwrap();
                seen.extend(page.items.iter().map(|n| n.id.clone()));
                match page.next_cursor {
                    Some(next) => cursor = Some(next),
                    None => break,
                }
            }

            let mut unique = seen.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), seen.len());
            prop_assert_eq!(seen.len(), count);
            for id in &seen {
                prop_assert!(notes.exists(id).unwrap());
            }
        }
    }
}
