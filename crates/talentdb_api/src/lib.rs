//! # TalentDB API
//!
//! Transport-agnostic request handlers for the TalentDB recruiting API.
//!
//! This crate provides:
//! - [`ApiContext`] - shared handler state over a backend handle
//! - Typed request DTOs and input validation
//! - The `{success, data?, error?}` response envelope every endpoint uses
//! - Error-to-status classification for the transport adapter
//!
//! # Architecture
//!
//! Handlers are plain synchronous methods; a transport adapter (HTTP
//! worker, test harness) parses the wire request into a DTO, calls the
//! handler, and serializes the envelope:
//!
//! ```rust,ignore
//! let ctx = ApiContext::new(backend);
//! let result = ctx.create_vacancy(request);
//! let (status, body) = respond(result);
//! ```
//!
//! Validation failures never reach the entity store; the only failure
//! a handler swallows is the secondary vacancy-summary sync after a
//! candidate write, which is logged and accepted as transient drift.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod envelope;
mod error;
mod handlers;
mod request;

pub use config::ApiConfig;
pub use envelope::{respond, ApiResponse, Deleted};
pub use error::{ApiError, ApiResult};
pub use handlers::dashboard::DashboardSummary;
pub use handlers::ApiContext;
pub use request::{
    CreateCandidate, CreateChat, CreateUser, CreateVacancy, ListQuery, PostMessage,
    UpdateCandidate, UpdateVacancy,
};
