//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pyinit-adapters` crate provides implementations.

use crate::domain::{Blueprint, ProjectStructure, RenderContext, TemplateContent, TemplateName};
use crate::error::PyinitResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyinit_adapters::filesystem::LocalFilesystem` (production)
/// - `pyinit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> PyinitResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> PyinitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template text lookup.
///
/// Implemented by:
/// - `pyinit_adapters::BuiltinCatalog` (texts compiled into the binary)
pub trait TemplateCatalog: Send + Sync {
    /// Get the body of a named template.
    fn get(&self, name: TemplateName) -> PyinitResult<TemplateContent>;

    /// The layout this catalog's templates are meant for.
    fn blueprint(&self) -> Blueprint;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `pyinit_adapters::renderer::SimpleRenderer` (variable substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a blueprint into a project structure.
    ///
    /// # Arguments
    ///
    /// * `blueprint` - Paths and template names to materialize
    /// * `catalog` - Source of template bodies
    /// * `context` - Variable substitution context
    /// * `project_root` - Directory the structure is rooted at
    fn render(
        &self,
        blueprint: &Blueprint,
        catalog: &dyn TemplateCatalog,
        context: &RenderContext,
        project_root: &Path,
    ) -> PyinitResult<ProjectStructure>;
}
