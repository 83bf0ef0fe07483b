//! Request handlers.

pub(crate) mod candidates;
pub(crate) mod chats;
pub(crate) mod dashboard;
pub(crate) mod users;
pub(crate) mod vacancies;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::request::ListQuery;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use talentdb_core::{Candidate, ChatBoard, Cursor, Entity, EntityStore, Page, User, Vacancy};
use talentdb_storage::KvBackend;
use uuid::Uuid;

/// Shared state for request handling.
///
/// Holds the backend handle and configuration; per-resource handler
/// methods live in the sibling modules as `impl ApiContext` blocks.
/// Cloning is cheap, the backend is shared.
#[derive(Clone)]
pub struct ApiContext {
    backend: Arc<dyn KvBackend>,
    config: ApiConfig,
}

impl ApiContext {
    /// Creates a context with default configuration.
    #[must_use]
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self::with_config(backend, ApiConfig::default())
    }

    /// Creates a context with the given configuration.
    #[must_use]
    pub fn with_config(backend: Arc<dyn KvBackend>, config: ApiConfig) -> Self {
        Self { backend, config }
    }

    /// Returns the backend handle.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn KvBackend> {
        &self.backend
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn vacancies(&self) -> EntityStore<Vacancy> {
        EntityStore::new(Arc::clone(&self.backend))
    }

    pub(crate) fn candidates(&self) -> EntityStore<Candidate> {
        EntityStore::new(Arc::clone(&self.backend))
    }

    pub(crate) fn users(&self) -> EntityStore<User> {
        EntityStore::new(Arc::clone(&self.backend))
    }

    pub(crate) fn chats(&self) -> EntityStore<ChatBoard> {
        EntityStore::new(Arc::clone(&self.backend))
    }

    /// Runs a listing with the query's cursor and a clamped limit.
    pub(crate) fn list_page<T: Entity>(
        &self,
        store: &EntityStore<T>,
        query: &ListQuery,
    ) -> ApiResult<Page<T>> {
        let cursor = query.cursor.clone().map(Cursor::from);
        let limit = query
            .limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        Ok(store.list(cursor.as_ref(), Some(limit))?)
    }
}

/// Fails with a validation error when `value` is blank.
pub(crate) fn require(value: &str, message: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(message));
    }
    Ok(())
}

/// Mints a fresh entity id.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time as an RFC 3339 string, millisecond precision.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("", "name required").is_err());
        assert!(require("   ", "name required").is_err());
        assert!(require("ok", "name required").is_ok());
    }

    #[test]
    fn minted_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn timestamps_are_rfc3339() {
        let ts = now_rfc3339();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
