//! Dashboard summary endpoint.

use crate::error::ApiResult;
use crate::handlers::ApiContext;
use serde::{Deserialize, Serialize};
use talentdb_core::{CandidateStage, CandidateStatus, VacancyStatus};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Vacancies not yet closed.
    pub active_vacancies: usize,
    /// Total candidates on file.
    pub new_candidates: usize,
    /// Candidates currently at the interview stage.
    pub interviews_today: usize,
    /// Candidates with hired status.
    pub hired_this_month: usize,
}

impl ApiContext {
    /// `GET /api/dashboard` - derived from full listings, seeded first.
    pub fn dashboard_summary(&self) -> ApiResult<DashboardSummary> {
        let vacancies = self.vacancies();
        let candidates = self.candidates();
        vacancies.ensure_seed()?;
        candidates.ensure_seed()?;

        let scan = self.config().title_scan_limit;
        let vacancies = vacancies.list(None, Some(scan))?.items;
        let candidates = candidates.list(None, Some(scan))?.items;

        Ok(DashboardSummary {
            active_vacancies: vacancies
                .iter()
                .filter(|v| v.status != VacancyStatus::Closed)
                .count(),
            new_candidates: candidates.len(),
            interviews_today: candidates
                .iter()
                .filter(|c| c.stage == CandidateStage::Interview)
                .count(),
            hired_this_month: candidates
                .iter()
                .filter(|c| c.status == CandidateStatus::Hired)
                .count(),
        })
    }
}
