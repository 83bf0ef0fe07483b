//! # TalentDB Core
//!
//! Indexed entity persistence for the TalentDB recruiting system.
//!
//! This crate provides:
//! - A generic [`EntityStore`] with create/read/patch/mutate/delete,
//!   cursor pagination, and idempotent seeding over any
//!   [`talentdb_storage::KvBackend`]
//! - The recruiting domain records (vacancies, candidates, users, chat
//!   boards) as plain data plus an [`Entity`] descriptor impl
//! - The candidate-to-vacancy denormalization pass in [`sync`]
//!
//! # Atomicity
//!
//! `patch` and `mutate` are read-modify-write cycles whose atomicity
//! rests on the backend serializing writes per key. There is no
//! cross-key atomicity: a candidate write and its vacancy sync are two
//! independent writes, and the sync step is allowed to fail without
//! undoing the primary write.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod entity;
mod error;
mod keys;
mod model;
mod seed;
pub mod sync;

pub use entity::{Cursor, Entity, EntityStore, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use error::{CoreError, CoreResult};
pub use model::{
    Candidate, CandidateStage, CandidateStatus, CandidateSummary, ChatBoard, ChatMessage,
    Priority, User, Vacancy, VacancyStatus,
};
