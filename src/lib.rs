//! # doxygen2docfx
//!
//! Converts the XML output of Doxygen into the YAML and Markdown files
//! consumed by DocFX.
//!
//! The conversion is a set of pure functions over a parsed XML tree:
//! - [`renderer`] turns Doxygen documentation markup into Markdown,
//! - [`yaml`] emits `UniversalReference` symbol documents and the table of
//!   contents,
//! - [`driver`] walks a whole document and writes the results to disk.

pub mod config;
pub mod doxygen;
pub mod driver;
pub mod error;
pub mod metadata;
pub mod parser;
pub mod renderer;
pub mod yaml;

pub use config::{parse_arguments, Config, Options};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
