// linesift - app/mod.rs
//
// Application layer: wires platform file access to the core filter.
// Dependencies: core, platform.

pub mod job;
