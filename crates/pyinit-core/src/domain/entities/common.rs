//! Small shared domain types.

use serde::Serialize;
use std::fmt;

/// What to do when a file already exists at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Replace whatever is there.
    #[default]
    Overwrite,
    /// Write only when nothing exists at the path yet.
    CreateIfAbsent,
}

impl WritePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::CreateIfAbsent => "create-if-absent",
        }
    }

    /// Whether a write should happen given whether the target exists.
    pub const fn should_write(&self, exists: bool) -> bool {
        match self {
            Self::Overwrite => true,
            Self::CreateIfAbsent => !exists,
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_if_absent_skips_existing() {
        assert!(WritePolicy::CreateIfAbsent.should_write(false));
        assert!(!WritePolicy::CreateIfAbsent.should_write(true));
        assert!(WritePolicy::Overwrite.should_write(true));
        assert!(WritePolicy::Overwrite.should_write(false));
    }
}
