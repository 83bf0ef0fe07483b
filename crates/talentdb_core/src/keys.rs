//! Key layout for the backing store.
//!
//! Three namespaces share one flat key space:
//!
//! - `e:<kind>:<id>` - the record itself
//! - `i:<kind>` - the kind's ordered id index (one JSON array)
//! - `s:<kind>` - the kind's seed flag

/// Key of an entity record.
pub(crate) fn record(kind: &str, id: &str) -> String {
    format!("e:{kind}:{id}")
}

/// Key of a kind's id index.
pub(crate) fn index(kind: &str) -> String {
    format!("i:{kind}")
}

/// Key of a kind's seed flag.
pub(crate) fn seed_flag(kind: &str) -> String {
    format!("s:{kind}")
}
