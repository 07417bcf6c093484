//! Trigon engine crate.
//!
//! A procedural-triangle renderer: the whole scene is two pipeline stage
//! pairs (plain and rainbow) that synthesize one triangle from the vertex
//! index. This crate owns the stage logic, the WGSL it compiles to, and
//! the platform + GPU runtime pieces that drive it.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod stage;
