//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldReport, ScaffoldService};
