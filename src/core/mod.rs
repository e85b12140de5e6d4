// linesift - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or open files directly.

pub mod filter;
pub mod model;
pub mod pattern;
