//! Step definitions for task list BDD scenarios.
