//! Queries over Doxygen's XML schema shared by the Markdown and YAML passes.

pub mod classifiers;
pub mod linked_text;
pub mod node_name;
pub mod public_docs;

pub use classifiers::*;
pub use linked_text::*;
pub use node_name::*;
pub use public_docs::*;
