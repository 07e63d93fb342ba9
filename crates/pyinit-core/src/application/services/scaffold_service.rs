//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire project creation workflow:
//! 1. Validate the project name and derive the package identifier
//! 2. Render the catalog's blueprint with a render context
//! 3. Write to the filesystem, honoring each file's write policy
//!
//! There is no rollback. A failure partway through leaves whatever was
//! already written and the error is returned to the caller.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateCatalog, TemplateRenderer},
    },
    domain::{
        DomainValidator as validator, FsEntry, PackageIdentifier, ProjectName, ProjectStructure,
        RenderContext,
    },
    error::PyinitResult,
};

/// What a call to [`ScaffoldService::create_project`] did.
///
/// All paths except `project_dir` are relative to `project_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub package: PackageIdentifier,
    /// Directories ensured to exist.
    pub directories: Vec<PathBuf>,
    /// Files written (new or replaced).
    pub written: Vec<PathBuf>,
    /// Write-once files left untouched because something already existed.
    pub preserved: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn new(project_dir: &Path, package: PackageIdentifier) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            package,
            directories: Vec::new(),
            written: Vec::new(),
            preserved: Vec::new(),
        }
    }
}

/// Main scaffolding service.
///
/// Orchestrates the render and write workflow for one project.
pub struct ScaffoldService {
    catalog: Box<dyn TemplateCatalog>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pyinit_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     catalog,    // impl TemplateCatalog
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            catalog,
            renderer,
            filesystem,
        }
    }

    /// Create a project named `project_name` inside `output_dir`.
    ///
    /// Directory creation is idempotent, so running this twice against the
    /// same output directory succeeds and refreshes every overwrite-policy
    /// file with identical content.
    #[instrument(
        skip_all,
        fields(
            project = %project_name.as_ref(),
            output_path = %output_dir.as_ref().display()
        )
    )]
    pub fn create_project(
        &self,
        project_name: impl AsRef<str>,
        output_dir: impl AsRef<Path>,
    ) -> PyinitResult<ScaffoldReport> {
        let output_dir = output_dir.as_ref();

        // 1. Validate inputs before touching the filesystem
        let name = ProjectName::new(project_name.as_ref())?;
        self.check_output_root(output_dir)?;

        // 2. Render
        let package = name.package();
        let structure = self.render(name, output_dir)?;
        info!(
            package = %package,
            entries = structure.entry_count(),
            "Project structure rendered"
        );

        // 3. Write
        let report = self.write_structure(&structure, package).inspect_err(|e| {
            warn!(error = %e, "Write failed; files already written are left in place");
        })?;

        info!(
            written = report.written.len(),
            preserved = report.preserved.len(),
            "Project created"
        );
        Ok(report)
    }

    /// Fail unless `output_dir` exists and is a directory.
    pub fn check_output_root(&self, output_dir: impl AsRef<Path>) -> PyinitResult<()> {
        let output_dir = output_dir.as_ref();
        if self.filesystem.is_dir(output_dir) {
            return Ok(());
        }
        Err(ApplicationError::OutputRootMissing {
            path: output_dir.to_path_buf(),
        }
        .into())
    }

    /// Render the project without writing anything.
    pub fn plan(
        &self,
        project_name: impl AsRef<str>,
        output_dir: impl AsRef<Path>,
    ) -> PyinitResult<ProjectStructure> {
        let name = ProjectName::new(project_name.as_ref())?;
        self.render(name, output_dir.as_ref())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render(&self, name: ProjectName, output_dir: &Path) -> PyinitResult<ProjectStructure> {
        let project_dir = output_dir.join(name.as_str());

        let blueprint = self.catalog.blueprint();
        validator::validate_blueprint(&blueprint)?;

        let context = RenderContext::new(name);
        let structure =
            self.renderer
                .render(&blueprint, self.catalog.as_ref(), &context, &project_dir)?;

        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    /// Write all entries in order.
    fn write_structure(
        &self,
        structure: &ProjectStructure,
        package: PackageIdentifier,
    ) -> PyinitResult<ScaffoldReport> {
        let root = structure.root();
        let mut report = ScaffoldReport::new(root, package);

        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                    report.directories.push(dir.path.clone());
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    if !file.policy.should_write(self.filesystem.exists(&path)) {
                        debug!(
                            path = %file.path.display(),
                            policy = %file.policy,
                            "Keeping existing file"
                        );
                        report.preserved.push(file.path.clone());
                        continue;
                    }

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %file.path.display(), bytes = file.size(), "Wrote file");
                    report.written.push(file.path.clone());
                }
            }
        }

        Ok(report)
    }
}
