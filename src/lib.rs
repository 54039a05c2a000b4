//! Tasklists: a backend for task lists and the tasks they contain.
//!
//! The crate exposes CRUD operations over task lists and tasks through a
//! JSON HTTP API, backed either by `PostgreSQL` or an in-memory store.
//!
//! # Architecture
//!
//! The [`tasks`] module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: `PostgreSQL` and in-memory implementations of the ports
//! - **Services**: Validation and orchestration over the ports
//!
//! # Modules
//!
//! - [`tasks`]: Task list and task model, persistence and services
//! - [`http`]: Axum router, wire types and error responses
//! - [`server`]: Configuration, telemetry and server bootstrap

pub mod http;
pub mod server;
pub mod tasks;
