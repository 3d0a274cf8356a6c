//! Data access layer repositories.
//!
//! Repositories provide an abstraction over database operations for the persisted
//! entities. Only create and read operations exist; no handler updates or deletes
//! rows, and the layer mirrors that.

pub mod repository;
pub mod user;
