pub mod blueprint;
pub mod common;
pub mod project_structure;
pub mod template;

pub use blueprint::Blueprint;
pub use project_structure::ProjectStructure;
pub use template::{RenderContext, TemplateName};
