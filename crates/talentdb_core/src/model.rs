//! Recruiting domain records.
//!
//! Plain data types plus an [`Entity`] impl each; wire field names are
//! camelCase to match the browser client.

use crate::entity::Entity;
use crate::seed;
use serde::{Deserialize, Serialize};

/// Lifecycle of a job vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VacancyStatus {
    /// Newly opened, no sourcing yet.
    Open,
    /// Actively sourcing candidates.
    Sourcing,
    /// Candidates in interviews.
    Interviewing,
    /// An offer is out.
    Offer,
    /// No longer hiring.
    Closed,
}

/// Hiring priority of a vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Fill as soon as possible.
    High,
    /// Normal priority.
    Medium,
    /// Backfill when convenient.
    Low,
}

/// Whether a candidate is still in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    /// In an active process.
    Active,
    /// Withdrawn or parked.
    Inactive,
    /// Accepted an offer.
    Hired,
}

/// Pipeline stage of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStage {
    /// Found but not yet applied.
    Sourced,
    /// Application received.
    Applied,
    /// In screening.
    Screening,
    /// In interviews.
    Interview,
    /// Offer extended.
    Offer,
    /// Hired.
    Hired,
}

/// Read-optimized candidate embed carried by a vacancy.
///
/// Not authoritative - the [`Candidate`] record is. The
/// [`crate::sync`] pass keeps these aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    /// Candidate id.
    pub id: String,
    /// Candidate display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// A job requisition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    /// Entity id.
    pub id: String,
    /// Job title; candidates reference vacancies by this text.
    pub title: String,
    /// Owning department.
    pub department: String,
    /// Lifecycle status.
    pub status: VacancyStatus,
    /// Hiring priority.
    pub priority: Priority,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// Embedded candidate summaries, denormalized from candidate records.
    pub candidates: Vec<CandidateSummary>,
}

impl Vacancy {
    /// Returns this vacancy's summary entry for `candidate_id`, if any.
    #[must_use]
    pub fn summary_of(&self, candidate_id: &str) -> Option<&CandidateSummary> {
        self.candidates.iter().find(|c| c.id == candidate_id)
    }
}

impl Entity for Vacancy {
    const KIND: &'static str = "vacancy";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::vacancies()
    }
}

/// An applicant. The authoritative record behind every
/// [`CandidateSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Entity id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Title of the vacancy applied for - matched by text, not a
    /// foreign key.
    pub applied_for: String,
    /// Whether the candidate is in play.
    pub status: CandidateStatus,
    /// Pipeline stage.
    pub stage: CandidateStage,
    /// RFC 3339 application timestamp.
    pub applied_date: String,
}

impl Candidate {
    /// The read-optimized form embedded in vacancies.
    #[must_use]
    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

impl Entity for Candidate {
    const KIND: &'static str = "candidate";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::candidates()
    }
}

/// An application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Entity id.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }
}

/// One message on a chat board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message id.
    pub id: String,
    /// Owning chat board id.
    pub chat_id: String,
    /// Author's user id.
    pub user_id: String,
    /// Message body.
    pub text: String,
    /// Epoch milliseconds.
    pub ts: i64,
}

/// A chat board with its messages embedded.
///
/// Messages are appended through `mutate`, so concurrent posts to the
/// same board resolve through the backend's per-key serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBoard {
    /// Entity id.
    pub id: String,
    /// Board title.
    pub title: String,
    /// Messages in post order.
    pub messages: Vec<ChatMessage>,
}

impl Entity for ChatBoard {
    const KIND: &'static str = "chat";

    fn id(&self) -> &str {
        &self.id
    }
}
