//! Entity type descriptor.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Describes a persistable entity type.
///
/// An entity is a plain data record plus this descriptor: a kind name
/// (the key-space namespace and index name), an id accessor, and an
/// optional seed set. There is one impl per concrete type - no
/// subclassing, the store is generic over the descriptor.
///
/// Records are stored as their JSON encoding, so the serde derives are
/// the codec.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Note {
///     id: String,
///     body: String,
/// }
///
/// impl Entity for Note {
///     const KIND: &'static str = "note";
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
/// ```
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + 'static {
    /// Kind name, singular (e.g. `"vacancy"`). Namespaces the record
    /// keys and names the kind's index.
    const KIND: &'static str;

    /// Returns the record's id.
    fn id(&self) -> &str;

    /// Fixed records written once per store lifetime so a first listing
    /// never observes an empty store. Empty by default.
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}
