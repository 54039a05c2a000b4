//! In-memory adapter implementations.
//!
//! Used by tests and by the server when no database URL is configured.

mod store;

pub use store::InMemoryTaskStore;
