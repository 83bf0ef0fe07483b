//! Candidate-to-vacancy denormalization.
//!
//! Vacancies embed read-optimized candidate summaries; candidate
//! records are authoritative. The operations here are the explicit
//! second phase of every candidate write: the caller performs the
//! primary candidate write first, then runs [`link_candidate`] (after
//! create/update) or [`unlink_candidate`] (after delete). They are
//! separate writes with no transaction across them - if the pass
//! fails, the primary write stands and the caller logs the drift
//! instead of rolling back.

use crate::entity::EntityStore;
use crate::error::CoreResult;
use crate::model::{Candidate, Vacancy};
use std::sync::Arc;
use talentdb_storage::KvBackend;
use tracing::debug;

/// Default cap on the lookup-by-title scan.
///
/// Vacancy resolution is a linear scan over the vacancy index; the cap
/// bounds it at small-shop scale. A secondary title index would replace
/// the scan behind the same signatures if that ceiling is ever hit.
pub const DEFAULT_TITLE_SCAN_LIMIT: usize = 1000;

/// What a sync pass did, for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Vacancy the candidate's summary was upserted into, if resolved.
    pub linked: Option<String>,
    /// Number of vacancies a stale summary was removed from.
    pub removed: usize,
}

fn scan_vacancies(
    backend: &Arc<dyn KvBackend>,
    scan_limit: usize,
) -> CoreResult<Vec<Vacancy>> {
    let vacancies = EntityStore::<Vacancy>::new(Arc::clone(backend));
    Ok(vacancies.list(None, Some(scan_limit))?.items)
}

/// Resolves the vacancy whose title equals `title`, case-insensitively.
///
/// Linear scan over the vacancy index, capped at `scan_limit` records.
pub fn find_vacancy_by_title(
    backend: &Arc<dyn KvBackend>,
    title: &str,
    scan_limit: usize,
) -> CoreResult<Option<Vacancy>> {
    let needle = title.to_lowercase();
    Ok(scan_vacancies(backend, scan_limit)?
        .into_iter()
        .find(|v| v.title.to_lowercase() == needle))
}

/// Aligns vacancy summaries with `candidate` after a create or update.
///
/// Upserts the candidate's summary into the vacancy matching its
/// current `applied_for` (replace if present, else append - at most
/// one summary per candidate id per vacancy). Any *other* vacancy
/// still carrying a summary for this candidate has it removed, so a
/// changed `applied_for` leaves no stale embed behind.
///
/// # Errors
///
/// Propagates store failures; the caller decides whether to surface or
/// log them (the primary candidate write is already committed).
pub fn link_candidate(
    backend: &Arc<dyn KvBackend>,
    candidate: &Candidate,
    scan_limit: usize,
) -> CoreResult<SyncOutcome> {
    let vacancies = EntityStore::<Vacancy>::new(Arc::clone(backend));
    let needle = candidate.applied_for.to_lowercase();
    let mut outcome = SyncOutcome {
        linked: None,
        removed: 0,
    };

    for vacancy in scan_vacancies(backend, scan_limit)? {
        let is_target = vacancy.title.to_lowercase() == needle;
        if is_target {
            let summary = candidate.summary();
            vacancies.mutate(&vacancy.id, |mut v| {
                match v.candidates.iter_mut().find(|c| c.id == summary.id) {
                    Some(existing) => *existing = summary.clone(),
                    None => v.candidates.push(summary.clone()),
                }
                v
            })?;
            outcome.linked = Some(vacancy.id);
        } else if vacancy.summary_of(&candidate.id).is_some() {
            vacancies.mutate(&vacancy.id, |mut v| {
                v.candidates.retain(|c| c.id != candidate.id);
                v
            })?;
            outcome.removed += 1;
        }
    }

    debug!(
        candidate = %candidate.id,
        linked = ?outcome.linked,
        removed = outcome.removed,
        "linked candidate into vacancy summaries"
    );
    Ok(outcome)
}

/// Removes `candidate`'s summary from every vacancy after its deletion.
///
/// The candidate record is already gone; the argument is the state
/// captured at delete time. Sweeps the scanned vacancies rather than
/// only the one matching `applied_for`, so a summary orphaned by an
/// earlier failed pass is also cleaned up.
///
/// # Errors
///
/// Propagates store failures, same contract as [`link_candidate`].
pub fn unlink_candidate(
    backend: &Arc<dyn KvBackend>,
    candidate: &Candidate,
    scan_limit: usize,
) -> CoreResult<SyncOutcome> {
    let vacancies = EntityStore::<Vacancy>::new(Arc::clone(backend));
    let mut removed = 0;

    for vacancy in scan_vacancies(backend, scan_limit)? {
        if vacancy.summary_of(&candidate.id).is_some() {
            vacancies.mutate(&vacancy.id, |mut v| {
                v.candidates.retain(|c| c.id != candidate.id);
                v
            })?;
            removed += 1;
        }
    }

    debug!(candidate = %candidate.id, removed, "unlinked candidate from vacancy summaries");
    Ok(SyncOutcome {
        linked: None,
        removed,
    })
}
