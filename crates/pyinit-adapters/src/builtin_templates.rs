//! Template texts compiled into the binary.
//!
//! [`BuiltinCatalog`] is the only catalog pyinit ships. It serves one fixed
//! clean-architecture Python layout: the blueprint is
//! [`Blueprint::standard`] and every [`TemplateName`] maps to one of the
//! constants below.
//!
//! Placeholders use the `{{VARIABLE}}` syntax understood by
//! [`RenderContext`](pyinit_core::domain::RenderContext). Bodies without
//! placeholders are served as [`TemplateContent::Literal`] so they are never
//! scanned.

use pyinit_core::{
    application::ports::TemplateCatalog,
    domain::{Blueprint, TemplateContent, TemplateName},
    error::PyinitResult,
};
use tracing::trace;

// ── Template texts ────────────────────────────────────────────────────────────

pub const PYPROJECT: &str = r#"[project]
name = "{{PROJECT_NAME_TOML}}"
version = "{{VERSION}}"
description = ""
requires-python = ">=3.11"
dependencies = []

[project.optional-dependencies]
dev = ["pytest", "ruff", "mypy"]

[tool.ruff]
line-length = 100
target-version = "py311"

[tool.ruff.lint]
select = ["E", "F", "I", "UP", "B", "SIM"]

[tool.mypy]
strict = true
python_version = "3.11"

[tool.pytest.ini_options]
testpaths = ["tests"]
pythonpath = ["src"]
"#;

// Recipe lines must start with a tab.
pub const MAKEFILE: &str = concat!(
    ".PHONY: install test lint format typecheck all\n",
    "\n",
    "install:\n",
    "\tuv sync\n",
    "\n",
    "test:\n",
    "\tuv run pytest\n",
    "\n",
    "lint:\n",
    "\tuv run ruff check src tests\n",
    "\n",
    "format:\n",
    "\tuv run ruff format src tests\n",
    "\n",
    "typecheck:\n",
    "\tuv run mypy src\n",
    "\n",
    "all: format lint typecheck test\n",
);

pub const GITIGNORE: &str = r#"__pycache__/
*.py[cod]
*$py.class
.venv/
venv/
.env
*.egg-info/
dist/
build/
.mypy_cache/
.pytest_cache/
.ruff_cache/
"#;

pub const PACKAGE_INIT: &str = r#""""{{DESCRIPTION}}"""

__version__ = "{{VERSION}}"
"#;

pub const BASE_PY: &str = r#""""Abstract base classes for dependency injection."""

from abc import ABC, abstractmethod
from typing import TypeVar

T = TypeVar("T")


class Repository(ABC):
    """Base repository interface."""

    @abstractmethod
    def save(self, entity: T) -> None:
        """Persist an entity."""
        ...

    @abstractmethod
    def find_by_id(self, entity_id: str) -> T | None:
        """Retrieve an entity by ID."""
        ...
"#;

pub const CONFIG_PY: &str = r#""""Application configuration."""

from dataclasses import dataclass, field
from pathlib import Path


@dataclass
class Config:
    """Main application configuration."""

    debug: bool = False
    log_level: str = "INFO"
    data_dir: Path = field(default_factory=lambda: Path("data"))
"#;

pub const PACKAGE_MARKER: &str = "\"\"\"Package.\"\"\"\n";

pub const EMPTY_MARKER: &str = "";

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Catalog backed by the constants in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Body for `name`. Total over [`TemplateName`].
    pub const fn content(name: TemplateName) -> TemplateContent {
        match name {
            TemplateName::Manifest => TemplateContent::Parameterized(PYPROJECT),
            TemplateName::BuildHelper => TemplateContent::Literal(MAKEFILE),
            TemplateName::IgnoreList => TemplateContent::Literal(GITIGNORE),
            TemplateName::PackageInit => TemplateContent::Parameterized(PACKAGE_INIT),
            TemplateName::BaseInterface => TemplateContent::Literal(BASE_PY),
            TemplateName::ConfigObject => TemplateContent::Literal(CONFIG_PY),
            TemplateName::PackageMarker => TemplateContent::Literal(PACKAGE_MARKER),
            TemplateName::EmptyMarker => TemplateContent::Literal(EMPTY_MARKER),
        }
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn get(&self, name: TemplateName) -> PyinitResult<TemplateContent> {
        trace!(template = %name, "Serving builtin template");
        Ok(Self::content(name))
    }

    fn blueprint(&self) -> Blueprint {
        Blueprint::standard()
    }
}
