//! Template catalog vocabulary and rendering context.
//!
//! A template is a named piece of static text. The set of names is closed
//! ([`TemplateName`]); the text behind each name comes from a
//! [`TemplateCatalog`](crate::application::ports::TemplateCatalog) adapter.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  TemplateName ──(catalog)──► TemplateContent              │
//! │                                   │                       │
//! │                 RenderContext ────┤ render()              │
//! │                                   ▼                       │
//! │                            rendered String                │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is plain placeholder substitution. There are no conditionals,
//! loops, or environment-dependent values, so the same context always
//! produces the same bytes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::{
    error::DomainError,
    value_objects::{PackageIdentifier, ProjectName},
};

/// Version string stamped into generated `__version__` and the manifest.
pub const INITIAL_VERSION: &str = "0.1.0";

/// Names of every template the catalog must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateName {
    /// `pyproject.toml`
    Manifest,
    /// `Makefile`
    BuildHelper,
    /// `.gitignore`
    IgnoreList,
    /// Top-level `__init__.py` carrying the package description.
    PackageInit,
    /// `base.py` with the abstract repository interface.
    BaseInterface,
    /// `config.py` with the configuration dataclass.
    ConfigObject,
    /// Docstring-only `__init__.py` for subpackages.
    PackageMarker,
    /// Empty `__init__.py` for test packages.
    EmptyMarker,
}

impl TemplateName {
    pub const ALL: [TemplateName; 8] = [
        Self::Manifest,
        Self::BuildHelper,
        Self::IgnoreList,
        Self::PackageInit,
        Self::BaseInterface,
        Self::ConfigObject,
        Self::PackageMarker,
        Self::EmptyMarker,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::BuildHelper => "build-helper",
            Self::IgnoreList => "ignore-list",
            Self::PackageInit => "package-init",
            Self::BaseInterface => "base-interface",
            Self::ConfigObject => "config-object",
            Self::PackageMarker => "package-marker",
            Self::EmptyMarker => "empty-marker",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::TemplateNotFound { name: s.into() })
    }
}

/// Template body.
///
/// `Literal` content is copied as-is and never scanned for placeholders;
/// `Parameterized` content goes through [`RenderContext::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateContent {
    Literal(&'static str),
    Parameterized(&'static str),
}

impl TemplateContent {
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(text) => (*text).to_string(),
            Self::Parameterized(text) => ctx.render(text),
        }
    }
}

/// Context for template rendering.
///
/// All values are materialized at construction.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | `my-project` | User input |
/// | `PROJECT_NAME_TOML` | `my-project` | Name escaped for a TOML basic string |
/// | `PACKAGE_NAME` | `my_project` | Derived |
/// | `DESCRIPTION` | `my-project package` | Derived |
/// | `VERSION` | `0.1.0` | Constant |
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: ProjectName,
    package: PackageIdentifier,
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: ProjectName) -> Self {
        let package = project_name.package();
        let mut vars = BTreeMap::new();

        vars.insert("PROJECT_NAME".to_string(), project_name.to_string());
        vars.insert(
            "PROJECT_NAME_TOML".to_string(),
            escape_toml_basic(project_name.as_str()),
        );
        vars.insert("PACKAGE_NAME".to_string(), package.to_string());
        vars.insert("DESCRIPTION".to_string(), project_name.description());
        vars.insert("VERSION".to_string(), INITIAL_VERSION.to_string());

        Self {
            project_name,
            package,
            variables: vars,
        }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn package(&self) -> &PackageIdentifier {
        &self.package
    }

    /// Replace `{{VARIABLE}}` placeholders in a single left-to-right pass.
    ///
    /// Substituted values are never rescanned, so a project name that itself
    /// looks like `{{PACKAGE_NAME}}` is written literally.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - an unterminated `{{` is copied through unchanged
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// Escape text for the body of a TOML basic (double-quoted) string.
fn escape_toml_basic(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
