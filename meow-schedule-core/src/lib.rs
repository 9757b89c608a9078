//! Core types for meow-schedule.
//!
//! This crate holds everything that is not presentation:
//! - `session` and `tag` for the data model
//! - `storage` for the key-value persistence adapter
//! - `store` for the single-writer domain state
//! - `window` for the 3-week calendar arithmetic
//! - `reminder` for the next-day notice
//! - `form` for input validation before anything reaches the store

pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod id;
pub mod reminder;
pub mod session;
pub mod smart_entry;
pub mod storage;
pub mod store;
pub mod tag;
pub mod window;

pub use session::{Session, SessionDraft};
pub use store::ScheduleStore;
pub use tag::{Tag, TagColor};
