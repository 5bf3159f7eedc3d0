//! Taskdesk: task management service core.
//!
//! This crate provides the storage-backed task lifecycle used by the
//! Taskdesk HTTP API: validated task records, a persistence port with
//! `PostgreSQL` and in-memory adapters, and the service layer the API
//! delegates to.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, the store port, and the lifecycle service
//! - [`api`]: Axum HTTP boundary over the lifecycle service
//! - [`config`]: Environment-driven application configuration

pub mod api;
pub mod config;
pub mod task;
