// linesift - platform/mod.rs
//
// Platform abstraction layer: filesystem access and config resolution.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
