//! flowdoc: keyword-driven flowchart generation.
//!
//! The [`flowchart`] module is the pure text-to-Mermaid compiler; [`routes`]
//! exposes it over HTTP.

pub mod config;
pub mod flowchart;
pub mod routes;
pub mod state;
