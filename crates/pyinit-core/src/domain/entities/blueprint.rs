//! The fixed project layout.
//!
//! A [`Blueprint`] lists what to create, in order, as path patterns that may
//! contain `{{PACKAGE_NAME}}`. It holds no text: file bodies are looked up by
//! [`TemplateName`] in a catalog at render time.

use crate::domain::{
    entities::{common::WritePolicy, template::TemplateName},
    error::DomainError,
};

/// Subpackages created under `src/<package>/`.
pub const SUBPACKAGES: [&str; 4] = ["entities", "services", "workflows", "infrastructure"];

/// Test suites created under `tests/`.
pub const TEST_SUITES: [&str; 2] = ["unit", "integration"];

/// Top-level directories with no generated content.
pub const EMPTY_DIRS: [&str; 2] = ["configs", "scripts"];

/// Root of the source package, relative to the project directory.
pub const PACKAGE_ROOT: &str = "src/{{PACKAGE_NAME}}";

const INIT_FILE: &str = "__init__.py";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: String,
}

impl DirectorySpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: String,
    pub template: TemplateName,
    pub policy: WritePolicy,
}

impl FileSpec {
    pub fn new(path: impl Into<String>, template: TemplateName) -> Self {
        Self {
            path: path.into(),
            template,
            policy: WritePolicy::Overwrite,
        }
    }

    pub fn create_if_absent(mut self) -> Self {
        self.policy = WritePolicy::CreateIfAbsent;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlueprintNode {
    Directory(DirectorySpec),
    File(FileSpec),
}

/// Ordered list of directories and files making up a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blueprint {
    nodes: Vec<BlueprintNode>,
}

impl Blueprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: BlueprintNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_directory(self, path: impl Into<String>) -> Self {
        self.with_node(BlueprintNode::Directory(DirectorySpec::new(path)))
    }

    pub fn with_file(self, spec: FileSpec) -> Self {
        self.with_node(BlueprintNode::File(spec))
    }

    pub fn nodes(&self) -> &[BlueprintNode] {
        &self.nodes
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.nodes.iter().filter_map(|n| match n {
            BlueprintNode::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectorySpec> {
        self.nodes.iter().filter_map(|n| match n {
            BlueprintNode::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// The clean-architecture Python layout.
    ///
    /// Order matters: directories first, then subpackage markers (write-once),
    /// then the files that are refreshed on every run.
    pub fn standard() -> Self {
        let mut bp = Self::new();

        for dir in EMPTY_DIRS {
            bp = bp.with_directory(dir);
        }
        for suite in TEST_SUITES {
            bp = bp.with_directory(format!("tests/{suite}"));
        }
        for sub in SUBPACKAGES {
            bp = bp.with_directory(format!("{PACKAGE_ROOT}/{sub}"));
        }

        // Hand-edited subpackage docstrings survive re-runs.
        for sub in SUBPACKAGES {
            bp = bp.with_file(
                FileSpec::new(
                    format!("{PACKAGE_ROOT}/{sub}/{INIT_FILE}"),
                    TemplateName::PackageMarker,
                )
                .create_if_absent(),
            );
        }

        bp = bp
            .with_file(FileSpec::new("pyproject.toml", TemplateName::Manifest))
            .with_file(FileSpec::new("Makefile", TemplateName::BuildHelper))
            .with_file(FileSpec::new(".gitignore", TemplateName::IgnoreList))
            .with_file(FileSpec::new(
                format!("{PACKAGE_ROOT}/{INIT_FILE}"),
                TemplateName::PackageInit,
            ))
            .with_file(FileSpec::new(
                format!("{PACKAGE_ROOT}/base.py"),
                TemplateName::BaseInterface,
            ))
            .with_file(FileSpec::new(
                format!("{PACKAGE_ROOT}/config.py"),
                TemplateName::ConfigObject,
            ))
            .with_file(FileSpec::new(
                format!("tests/{INIT_FILE}"),
                TemplateName::EmptyMarker,
            ));

        for suite in TEST_SUITES {
            bp = bp.with_file(FileSpec::new(
                format!("tests/{suite}/{INIT_FILE}"),
                TemplateName::EmptyMarker,
            ));
        }

        bp
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::InvalidTemplate("Blueprint is empty".into()));
        }
        for node in &self.nodes {
            let path = match node {
                BlueprintNode::Directory(d) => &d.path,
                BlueprintNode::File(f) => &f.path,
            };
            if path.starts_with('/') {
                return Err(DomainError::AbsolutePathNotAllowed { path: path.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_every_directory() {
        let bp = Blueprint::standard();
        let dirs: Vec<&str> = bp.directories().map(|d| d.path.as_str()).collect();
        assert_eq!(
            dirs,
            vec![
                "configs",
                "scripts",
                "tests/unit",
                "tests/integration",
                "src/{{PACKAGE_NAME}}/entities",
                "src/{{PACKAGE_NAME}}/services",
                "src/{{PACKAGE_NAME}}/workflows",
                "src/{{PACKAGE_NAME}}/infrastructure",
            ]
        );
    }

    #[test]
    fn only_subpackage_markers_are_write_once() {
        let bp = Blueprint::standard();
        let write_once: Vec<&FileSpec> = bp
            .files()
            .filter(|f| f.policy == WritePolicy::CreateIfAbsent)
            .collect();

        assert_eq!(write_once.len(), SUBPACKAGES.len());
        assert!(write_once.iter().all(|f| {
            f.template == TemplateName::PackageMarker && f.path.starts_with(PACKAGE_ROOT)
        }));
    }

    #[test]
    fn test_markers_are_refreshed() {
        let bp = Blueprint::standard();
        let empties: Vec<&FileSpec> = bp
            .files()
            .filter(|f| f.template == TemplateName::EmptyMarker)
            .collect();

        assert_eq!(empties.len(), 3);
        assert!(empties.iter().all(|f| f.policy == WritePolicy::Overwrite));
    }

    #[test]
    fn empty_blueprint_is_invalid() {
        assert!(Blueprint::new().validate().is_err());
        assert!(Blueprint::standard().validate().is_ok());
    }
}
