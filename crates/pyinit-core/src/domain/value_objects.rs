//! Domain value objects: ProjectName and PackageIdentifier.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `ProjectName` is validated at construction; `PackageIdentifier` is a pure
//! function of a `ProjectName` and cannot be built any other way.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// The user-supplied project name.
///
/// Used verbatim in the manifest and as the project directory name, so it
/// must be non-empty and a single normal path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(invalid(&name, "name cannot be empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid(&name, "name cannot contain path separators"));
        }

        // "." and ".." are single components but do not name a new directory.
        let mut components = Path::new(&name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Self(name)),
            _ => Err(invalid(&name, "name must be a plain directory name")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package identifier derived from this name.
    pub fn package(&self) -> PackageIdentifier {
        PackageIdentifier::derive(self)
    }

    /// Default description written into the top-level package docstring.
    pub fn description(&self) -> String {
        format!("{} package", self.0)
    }
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── PackageIdentifier ────────────────────────────────────────────────────────

/// Module-path form of a project name.
///
/// Hyphens become underscores. Nothing else is rewritten: a name such as
/// `my.app` yields the package `my.app`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageIdentifier(String);

impl PackageIdentifier {
    pub fn derive(name: &ProjectName) -> Self {
        Self(derive_package_name(name.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hyphen to underscore, all other characters pass through.
pub fn derive_package_name(name: &str) -> String {
    name.replace('-', "_")
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphens_become_underscores() {
        let name = ProjectName::new("my-project").unwrap();
        assert_eq!(name.package().as_str(), "my_project");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(derive_package_name("My.App v2"), "My.App v2");
        assert_eq!(derive_package_name("a--b_c"), "a__b_c");
        assert_eq!(derive_package_name("widget"), "widget");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            ProjectName::new(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn path_like_names_are_rejected() {
        for bad in ["a/b", "a\\b", ".", "..", "/abs"] {
            assert!(ProjectName::new(bad).is_err(), "accepted: {bad}");
        }
    }

    #[test]
    fn dotted_and_spaced_names_are_accepted() {
        for good in ["my-project", "my.app", ".hidden", "with space", "Widget2"] {
            assert!(ProjectName::new(good).is_ok(), "rejected: {good}");
        }
    }

    #[test]
    fn description_mentions_name() {
        let name: ProjectName = "widget".parse().unwrap();
        assert_eq!(name.description(), "widget package");
    }
}
