//! Core functionality for the lint stylesheet and script linter
//!
//! This crate provides the core linting functionality including:
//! - File discovery and partitioning by language
//! - Parsing of stylesheets, scripts and the regions embedded in markup
//! - The style and script checkers and their rules
//! - Diagnostic generation, aggregation and automatic fixes
//! - The bundled rule preset

pub mod aggregate;
pub mod analyze;
pub mod check;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod document;
pub mod error;
pub mod fix;
pub mod fs;
pub mod lints;
pub mod location;
pub mod preset;
pub mod rule_set;
pub mod style_tree;
pub mod utils_style;
