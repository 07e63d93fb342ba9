//! Infrastructure adapters for pyinit.
//!
//! This crate implements the ports defined in `pyinit_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

pub use builtin_templates::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
