//! Candidate endpoints.
//!
//! Candidate writes are two-phase: the primary record write commits
//! first, then the vacancy-summary sync runs as an independent second
//! write. A failed sync is logged and swallowed - the user-facing
//! write never blocks on the denormalized copy.

use crate::envelope::Deleted;
use crate::error::ApiResult;
use crate::handlers::{new_id, now_rfc3339, require, ApiContext};
use crate::request::{to_partial, CreateCandidate, ListQuery, UpdateCandidate};
use talentdb_core::sync::{link_candidate, unlink_candidate};
use talentdb_core::{Candidate, Page};
use tracing::warn;

impl ApiContext {
    /// `GET /api/candidates` - seeded listing in index order.
    pub fn list_candidates(&self, query: &ListQuery) -> ApiResult<Page<Candidate>> {
        let store = self.candidates();
        store.ensure_seed()?;
        self.list_page(&store, query)
    }

    /// `POST /api/candidates`.
    pub fn create_candidate(&self, request: CreateCandidate) -> ApiResult<Candidate> {
        require(&request.name, "Name and email are required")?;
        require(&request.email, "Name and email are required")?;

        let id = new_id();
        let candidate = Candidate {
            avatar_url: format!("https://i.pravatar.cc/150?u={id}"),
            id,
            name: request.name,
            email: request.email,
            applied_for: request.applied_for,
            status: request.status,
            stage: request.stage,
            applied_date: now_rfc3339(),
        };

        let created = self.candidates().create(candidate)?;
        let sync = link_candidate(self.backend(), &created, self.config().title_scan_limit);
        self.sync_after_write(sync, &created.id);
        Ok(created)
    }

    /// `GET /api/candidates/:id`.
    pub fn get_candidate(&self, id: &str) -> ApiResult<Candidate> {
        Ok(self.candidates().get(id)?)
    }

    /// `PUT`/`PATCH /api/candidates/:id` - partial update, then re-sync
    /// against the (possibly changed) `appliedFor` target.
    pub fn update_candidate(&self, id: &str, request: &UpdateCandidate) -> ApiResult<Candidate> {
        let partial = to_partial(request)?;
        let updated = self.candidates().patch(id, &partial)?;
        let sync = link_candidate(self.backend(), &updated, self.config().title_scan_limit);
        self.sync_after_write(sync, id);
        Ok(updated)
    }

    /// `DELETE /api/candidates/:id` - 404 when nothing existed.
    ///
    /// The record is captured before deletion so the sync pass still
    /// knows which vacancy the summary lived in; the delete itself
    /// commits before the sweep runs, same as the other write paths.
    pub fn delete_candidate(&self, id: &str) -> ApiResult<Deleted> {
        let store = self.candidates();
        let candidate = store.get(id)?;
        store.delete(id)?;

        let sync = unlink_candidate(self.backend(), &candidate, self.config().title_scan_limit);
        self.sync_after_write(sync, id);
        Ok(Deleted { id: id.to_string() })
    }

    /// Reports a secondary-sync failure without failing the request.
    fn sync_after_write<T>(&self, outcome: talentdb_core::CoreResult<T>, candidate_id: &str) {
        if let Err(error) = outcome {
            warn!(
                candidate = %candidate_id,
                %error,
                "vacancy summary sync failed; accepting denormalization drift"
            );
        }
    }
}
