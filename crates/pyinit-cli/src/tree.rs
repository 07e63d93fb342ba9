//! Tree-shaped rendering of a project layout.
//!
//! Children of each directory are listed files first, then subdirectories,
//! each group in the order they were added.

use std::path::{Component, Path};

#[derive(Debug, Default)]
struct Node {
    files: Vec<String>,
    dirs: Vec<(String, Node)>,
}

impl Node {
    fn insert(&mut self, parts: &[String], is_dir: bool) {
        match parts {
            [] => {}
            [file] if !is_dir => {
                if !self.files.contains(file) {
                    self.files.push(file.clone());
                }
            }
            [first, rest @ ..] => self.dir_mut(first).insert(rest, is_dir),
        }
    }

    fn dir_mut(&mut self, name: &str) -> &mut Node {
        let idx = match self.dirs.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                self.dirs.push((name.to_string(), Node::default()));
                self.dirs.len() - 1
            }
        };
        &mut self.dirs[idx].1
    }

    fn render(&self, prefix: &str, out: &mut Vec<String>) {
        let total = self.files.len() + self.dirs.len();
        let branch = |i: usize| if i + 1 == total { "└── " } else { "├── " };

        for (i, file) in self.files.iter().enumerate() {
            out.push(format!("{prefix}{}{file}", branch(i)));
        }
        for (j, (name, child)) in self.dirs.iter().enumerate() {
            let i = self.files.len() + j;
            out.push(format!("{prefix}{}{name}/", branch(i)));
            let extension = if i + 1 == total { "    " } else { "│   " };
            child.render(&format!("{prefix}{extension}"), out);
        }
    }
}

/// A directory tree built from relative paths.
#[derive(Debug)]
pub struct FileTree {
    root: String,
    node: Node,
}

impl FileTree {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            node: Node::default(),
        }
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        self.node.insert(&segments(path.as_ref()), true);
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        self.node.insert(&segments(path.as_ref()), false);
    }

    /// One string per line, starting with `root/`.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![format!("{}/", self.root)];
        self.node.render("", &mut out);
        out
    }
}

fn segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_come_before_directories() {
        let mut tree = FileTree::new("widget");
        tree.add_dir("configs");
        tree.add_file("pyproject.toml");
        tree.add_dir("src/widget/entities");
        tree.add_file("src/widget/base.py");
        tree.add_file("src/widget/entities/__init__.py");

        assert_eq!(
            tree.lines(),
            vec![
                "widget/",
                "├── pyproject.toml",
                "├── configs/",
                "└── src/",
                "    └── widget/",
                "        ├── base.py",
                "        └── entities/",
                "            └── __init__.py",
            ]
        );
    }

    #[test]
    fn nested_branches_keep_the_vertical_rule() {
        let mut tree = FileTree::new("p");
        tree.add_file("tests/unit/__init__.py");
        tree.add_dir("scripts");

        assert_eq!(
            tree.lines(),
            vec![
                "p/",
                "├── tests/",
                "│   └── unit/",
                "│       └── __init__.py",
                "└── scripts/",
            ]
        );
    }

    #[test]
    fn repeated_paths_are_listed_once() {
        let mut tree = FileTree::new("p");
        tree.add_file("Makefile");
        tree.add_file("Makefile");
        tree.add_dir("configs");
        tree.add_dir("configs");

        assert_eq!(tree.lines().len(), 3);
    }
}
