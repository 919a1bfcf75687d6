//! clean-env
//!
//! Validates process environment variables against a project policy before
//! a production build: required variables must be present, excluded ones
//! must be absent. Exports the core components for testing and integration.

pub mod check;
pub mod config;
pub mod env;
pub mod error;
pub mod prompt;
pub mod report;
