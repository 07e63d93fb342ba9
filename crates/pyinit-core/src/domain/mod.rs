// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for pyinit.
//!
//! This module contains pure logic with no I/O. Filesystem access, template
//! text, and rendering are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    blueprint::{
        Blueprint, BlueprintNode, DirectorySpec, EMPTY_DIRS, FileSpec, PACKAGE_ROOT, SUBPACKAGES,
        TEST_SUITES,
    },
    common::WritePolicy,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    template::{INITIAL_VERSION, RenderContext, TemplateContent, TemplateName},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{PackageIdentifier, ProjectName, derive_package_name};

pub use validation::DomainValidator;
