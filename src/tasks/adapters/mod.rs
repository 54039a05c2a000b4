//! Adapter implementations for task list and task persistence ports.

pub mod memory;
pub mod postgres;
