//! Keyword-driven flowchart generator.
//!
//! Compiles line-oriented process documentation (`START:`, `STEP:`, `IF:`,
//! `YES:`/`NO:`, `PARALLEL START:`, `GROUP START:`, `GO TO:`, ...) into
//! Mermaid `graph TD` source. Generation is a pure function of the input:
//! each call gets fresh parse state and the same text always renders to the
//! same bytes.

pub mod ast;
pub mod directive;
pub mod parse;
pub mod render;
pub mod samples;

pub use parse::parse;
pub use render::{RenderOptions, render};

/// Generate Mermaid source with default render options.
#[must_use]
pub fn generate(documentation: &str) -> String {
    generate_with(documentation, &RenderOptions::default())
}

/// Generate Mermaid source with explicit render options.
#[must_use]
pub fn generate_with(documentation: &str, options: &RenderOptions) -> String {
    render(&parse(documentation), options)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
