//! Storage backend trait definition.

use crate::error::StorageResult;

/// A low-level key-value backend for TalentDB.
///
/// Backends are **opaque byte stores**. They map string keys to byte
/// values and know nothing about entities, indexes, or seed flags -
/// TalentDB owns all key layout interpretation.
///
/// # Invariants
///
/// - `get` returns exactly the bytes last `put` for that key
/// - Absent keys are `Ok(None)` from `get`, never an error
/// - Writes to the **same key** are serialized: two concurrent `put`
///   calls never interleave, one of them wins whole. The entity layer's
///   read-modify-write operations depend on this; it is a contract the
///   backend must honor, not something enforced above it.
/// - There is no atomicity **across** keys
/// - Backends must be `Send + Sync` for concurrent access
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - for testing
/// - [`super::FileBackend`] - for persistent storage
pub trait KvBackend: Send + Sync {
    /// Reads the value stored at `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error only for underlying I/O failures.
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Stores `value` at `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Deletes the value at `key`.
    ///
    /// Returns whether a value was present. Deleting an absent key is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails.
    fn delete(&self, key: &str) -> StorageResult<bool>;

    /// Returns all keys starting with `prefix`, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the enumeration fails.
    fn list_prefix(&self, prefix: &str) -> StorageResult<Vec<String>>;
}
