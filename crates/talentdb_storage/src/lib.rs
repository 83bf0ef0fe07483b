//! # TalentDB Storage
//!
//! Key-value backing store abstraction for TalentDB.
//!
//! This crate provides:
//! - [`KvBackend`] - the opaque byte-store trait the entity layer builds on
//! - [`InMemoryBackend`] - for tests and ephemeral stores
//! - [`FileBackend`] - one-file-per-key persistent storage

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::KvBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
