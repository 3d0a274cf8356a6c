//! Application models and type definitions.
//!
//! Data models for the service: the shared application state, response envelope DTOs,
//! health probe DTOs, database model type aliases, and validated input types for the
//! persisted entities.

pub mod api;
pub mod app;
pub mod db;
pub mod health;
pub mod repository;
pub mod user;
