//! Generic indexed entity persistence.

mod cursor;
mod descriptor;
mod index;
mod store;

pub use cursor::{Cursor, Page};
pub use descriptor::Entity;
pub use store::{EntityStore, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
