//! Task list and task management.
//!
//! This module owns the two related entities of the service: task lists and
//! the tasks they contain. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! Tasks reference their owning list through an explicit identifier. Lists
//! never hold a live back-reference graph; the tasks of a list are loaded by
//! query into a [`domain::TaskListOverview`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
