//! Typed request DTOs.
//!
//! Mirrors of the browser client's CRUD payloads. Update DTOs are
//! all-optional; fields left out of the request stay out of the patch,
//! which is what keeps `patch` a strictly shallow merge.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use talentdb_core::{CandidateStage, CandidateStatus, Priority, VacancyStatus};

/// Pagination parameters of a listing request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Resume token from a previous page, if any.
    pub cursor: Option<String>,
    /// Requested page size.
    pub limit: Option<usize>,
}

/// Payload of `POST /api/vacancies`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVacancy {
    /// Job title.
    pub title: String,
    /// Owning department.
    pub department: String,
    /// Lifecycle status.
    pub status: VacancyStatus,
    /// Hiring priority.
    pub priority: Priority,
}

/// Payload of `PUT`/`PATCH /api/vacancies/:id`; every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVacancy {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VacancyStatus>,
    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Payload of `POST /api/candidates`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidate {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Title of the vacancy applied for.
    pub applied_for: String,
    /// Whether the candidate is in play.
    pub status: CandidateStatus,
    /// Pipeline stage.
    pub stage: CandidateStage,
}

/// Payload of `PUT`/`PATCH /api/candidates/:id`; every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New vacancy title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_for: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    /// New stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<CandidateStage>,
}

/// Payload of `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
}

/// Payload of `POST /api/chats`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChat {
    /// Board title.
    pub title: String,
}

/// Payload of `POST /api/chats/:chatId/messages`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessage {
    /// Author's user id.
    pub user_id: String,
    /// Message body.
    pub text: String,
}

/// Serializes an all-optional update DTO into the field map `patch`
/// consumes. Absent fields never appear in the map.
pub(crate) fn to_partial<T: Serialize>(update: &T) -> ApiResult<Map<String, Value>> {
    match serde_json::to_value(update).map_err(talentdb_core::CoreError::from)? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::validation(format!(
            "expected an object payload, got {other}"
        ))),
    }
}
