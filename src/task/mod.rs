//! Task lifecycle management for Taskdesk.
//!
//! This module implements the task CRUD core: creating task records with
//! server-assigned identifiers and timestamps, retrieving and listing them
//! with status filtering and pagination, applying partial updates with
//! merge-on-load semantics, and deleting them permanently. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
