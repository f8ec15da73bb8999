//! diario - Terminal note journal
//!
//! A single-screen journal of short entries (title + description). Entries are
//! kept in an ordered in-memory collection and mirrored to local storage as one
//! JSON snapshot after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DiarioError;
pub use logging::init_logging;
