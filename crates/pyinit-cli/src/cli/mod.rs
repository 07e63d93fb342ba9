//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "pyinit",
    bin_name = "pyinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Initialize a Python project with a clean architecture layout",
    long_about = "pyinit creates a Python project skeleton: pyproject.toml, a uv-driven \
                  Makefile, .gitignore, a src/ package split into entities, services, \
                  workflows and infrastructure, and a tests/ tree. Re-running it \
                  refreshes the generated files but keeps subpackage __init__.py files.",
    after_help = "EXAMPLES:\n\
        \x20 pyinit my-project\n\
        \x20 pyinit widget -o ~/code\n\
        \x20 pyinit widget --dry-run\n\
        \x20 pyinit --completions bash > ~/.local/share/bash-completion/completions/pyinit",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project name, used as the directory name and in pyproject.toml.
    #[arg(
        value_name = "NAME",
        required_unless_present = "completions",
        help = "Project name (e.g., my-project)"
    )]
    pub name: Option<String>,

    /// Directory the project directory is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
