//! Pyinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pyinit
//! Python project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pyinit-cli (CLI)             │
//! │      (parses args, prints summary)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │   (TemplateCatalog, Renderer, Fs)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pyinit-adapters (Infrastructure)    │
//! │ (BuiltinCatalog, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectName, Blueprint, RenderContext) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pyinit_core::prelude::*;
//!
//! let service = ScaffoldService::new(catalog, renderer, filesystem);
//! let report = service.create_project("my-project", ".")?;
//! assert_eq!(report.package.as_str(), "my_project");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{Filesystem, TemplateCatalog, TemplateRenderer},
    };
    pub use crate::domain::{
        Blueprint, PackageIdentifier, ProjectName, ProjectStructure, RenderContext,
        TemplateContent, TemplateName, WritePolicy,
    };
    pub use crate::error::{PyinitError, PyinitResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
