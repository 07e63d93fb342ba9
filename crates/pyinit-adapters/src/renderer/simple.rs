//! Simple variable substitution renderer.

use std::path::{Path, PathBuf};

use pyinit_core::{
    application::{
        ApplicationError,
        ports::{TemplateCatalog, TemplateRenderer},
    },
    domain::{Blueprint, BlueprintNode, ProjectStructure, RenderContext, TemplateName},
    error::PyinitResult,
};
use tracing::{debug, instrument};

/// Simple renderer using basic variable substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(project = %context.project_name()))]
    fn render(
        &self,
        blueprint: &Blueprint,
        catalog: &dyn TemplateCatalog,
        context: &RenderContext,
        project_root: &Path,
    ) -> PyinitResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(project_root);

        for node in blueprint.nodes() {
            match node {
                BlueprintNode::Directory(spec) => {
                    structure.add_directory(render_path(&spec.path, context));
                }
                BlueprintNode::File(spec) => {
                    let content = catalog.get(spec.template)?.render(context);
                    if spec.template == TemplateName::Manifest {
                        check_manifest(&content)?;
                    }
                    structure.add_file(render_path(&spec.path, context), content, spec.policy);
                }
            }
        }

        debug!(entries = structure.entry_count(), "Rendered blueprint");

        Ok(structure)
    }
}

/// Render a `/`-separated path pattern into a native relative path.
fn render_path(pattern: &str, ctx: &RenderContext) -> PathBuf {
    pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| ctx.render(segment))
        .collect()
}

/// The manifest is the one file other tools parse; refuse to emit broken TOML.
fn check_manifest(content: &str) -> PyinitResult<()> {
    toml::from_str::<toml::Table>(content).map_err(|e| ApplicationError::RenderingFailed {
        reason: format!("pyproject.toml is not valid TOML: {}", e.message()),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuiltinCatalog;
    use pyinit_core::{
        domain::{ProjectName, TemplateContent, WritePolicy},
        error::PyinitError,
    };

    fn ctx(name: &str) -> RenderContext {
        RenderContext::new(ProjectName::new(name).unwrap())
    }

    #[test]
    fn package_paths_use_derived_identifier() {
        let catalog = BuiltinCatalog::new();
        let structure = SimpleRenderer::new()
            .render(
                &catalog.blueprint(),
                &catalog,
                &ctx("my-project"),
                Path::new("/out/my-project"),
            )
            .unwrap();

        assert!(
            structure
                .directories()
                .any(|d| d.path == Path::new("src/my_project/entities"))
        );
        let init = structure.file("src/my_project/__init__.py").unwrap();
        assert!(init.content.contains("my-project package"));
        assert_eq!(init.policy, WritePolicy::Overwrite);

        let marker = structure
            .file("src/my_project/workflows/__init__.py")
            .unwrap();
        assert_eq!(marker.policy, WritePolicy::CreateIfAbsent);
    }

    #[test]
    fn standard_layout_renders_every_file() {
        let catalog = BuiltinCatalog::new();
        let structure = SimpleRenderer::new()
            .render(
                &catalog.blueprint(),
                &catalog,
                &ctx("widget"),
                Path::new("/x/widget"),
            )
            .unwrap();

        assert_eq!(structure.directories().count(), 8);
        assert_eq!(structure.files().count(), 13);
        assert_eq!(
            structure
                .file("tests/unit/__init__.py")
                .map(|f| f.is_empty()),
            Some(true)
        );
    }

    struct BrokenManifest;

    impl TemplateCatalog for BrokenManifest {
        fn get(&self, name: TemplateName) -> PyinitResult<TemplateContent> {
            match name {
                TemplateName::Manifest => Ok(TemplateContent::Literal("[project\nname = ")),
                other => BuiltinCatalog::new().get(other),
            }
        }

        fn blueprint(&self) -> Blueprint {
            Blueprint::standard()
        }
    }

    #[test]
    fn invalid_manifest_is_a_rendering_error() {
        let catalog = BrokenManifest;
        let err = SimpleRenderer::new()
            .render(
                &catalog.blueprint(),
                &catalog,
                &ctx("widget"),
                Path::new("/x"),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            PyinitError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }
}
