//! The default command: create (or preview) a project.
//!
//! Responsibility: resolve the output directory, call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use pyinit_adapters::{BuiltinCatalog, LocalFilesystem, SimpleRenderer};
use pyinit_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{PackageIdentifier, ProjectName, ProjectStructure, WritePolicy},
    error::PyinitError,
};

use crate::{
    cli::OutputFormat,
    error::{CliResult, IntoCli},
    output::OutputManager,
    tree::FileTree,
};

/// What the user asked for, after clap.
#[derive(Debug)]
pub struct CreateRequest {
    pub name: String,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

#[instrument(skip_all, fields(project = %request.name, dry_run = request.dry_run))]
pub fn execute(request: CreateRequest, output: &OutputManager) -> CliResult<()> {
    let output_dir = match request.output {
        Some(dir) => dir,
        None => std::env::current_dir()
            .with_cli_context(|| "Failed to resolve the current directory")?,
    };
    debug!(output_dir = %output_dir.display(), "Output directory resolved");

    let service = build_service();

    if request.dry_run {
        let plan = service.plan(&request.name, &output_dir)?;
        let root_ready = service.check_output_root(&output_dir).is_ok();
        return show_plan(&request.name, &output_dir, root_ready, &plan, output);
    }

    let report = service.create_project(&request.name, &output_dir)?;
    info!(project_dir = %report.project_dir.display(), "Project created");

    if output.format() == OutputFormat::Json {
        return output.json(&report);
    }
    show_report(&request.name, &report, output)
}

fn build_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

// ── Presentation ──────────────────────────────────────────────────────────────

fn show_report(name: &str, report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.success(&format!("Created project: {}", report.project_dir.display()))?;

    if !report.preserved.is_empty() {
        output.info(&format!(
            "Kept {} existing subpackage __init__.py file(s)",
            report.preserved.len()
        ))?;
    }

    output.print("")?;
    output.print("Structure:")?;
    output.lines(&report_tree(name, report).lines(), 2)?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {name}"))?;
    output.print("  uv sync")?;

    Ok(())
}

fn report_tree(name: &str, report: &ScaffoldReport) -> FileTree {
    let mut tree = FileTree::new(name);
    for dir in &report.directories {
        tree.add_dir(dir);
    }
    for file in report.written.iter().chain(&report.preserved) {
        tree.add_file(file);
    }
    tree
}

/// Dry-run view of a [`ProjectStructure`].
#[derive(Debug, Serialize)]
struct PlannedProject<'a> {
    project_dir: &'a Path,
    package: PackageIdentifier,
    directories: Vec<&'a Path>,
    files: Vec<PlannedFile<'a>>,
}

#[derive(Debug, Serialize)]
struct PlannedFile<'a> {
    path: &'a Path,
    policy: WritePolicy,
    bytes: usize,
}

fn show_plan(
    name: &str,
    output_dir: &Path,
    root_ready: bool,
    plan: &ProjectStructure,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let package = ProjectName::new(name).map_err(PyinitError::from)?.package();
        return output.json(&PlannedProject {
            project_dir: plan.root(),
            package,
            directories: plan.directories().map(|d| d.path.as_path()).collect(),
            files: plan
                .files()
                .map(|f| PlannedFile {
                    path: &f.path,
                    policy: f.policy,
                    bytes: f.size(),
                })
                .collect(),
        });
    }

    output.header(&format!(
        "Dry run: would create {}",
        plan.root().display()
    ))?;
    if !root_ready {
        output.warning(&format!(
            "{} does not exist; a real run would fail",
            output_dir.display()
        ))?;
    }

    let mut tree = FileTree::new(name);
    for dir in plan.directories() {
        tree.add_dir(&dir.path);
    }
    for file in plan.files() {
        tree.add_file(&file.path);
    }

    output.print("")?;
    output.lines(&tree.lines(), 2)?;
    output.print("")?;
    output.info("No files were written")?;

    Ok(())
}
