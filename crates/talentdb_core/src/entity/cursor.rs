//! Opaque pagination cursors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque resume position in a kind's index order.
///
/// Callers may compare cursors for equality and hand them back to
/// `list`; the content carries no other meaning. Internally a cursor is
/// the id at which the next page begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps a raw token received from a caller.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records in index order.
    pub items: Vec<T>,
    /// Resume token for the next page; `None` at end of index.
    pub next_cursor: Option<Cursor>,
}

/// Slices one page out of an ordered id list.
///
/// No cursor means start of index. A cursor whose id is no longer in
/// the index (deleted since it was handed out) is treated as an
/// exhausted listing rather than restarting from the head, which would
/// hand the caller duplicates.
pub(crate) fn page_ids(
    ids: &[String],
    cursor: Option<&Cursor>,
    limit: usize,
) -> (Vec<String>, Option<Cursor>) {
    let start = match cursor {
        None => 0,
        Some(c) => match ids.iter().position(|id| id == c.as_str()) {
            Some(pos) => pos,
            None => return (Vec::new(), None),
        },
    };

    let end = start.saturating_add(limit).min(ids.len());
    let items = ids[start..end].to_vec();
    let next = ids.get(end).map(|id| Cursor::new(id.clone()));
    (items, next)
}
