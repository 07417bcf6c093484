//! Programmable pipeline stages, as plain Rust.
//!
//! The triangle is synthesized entirely in the vertex stage from the
//! built-in vertex index; there is no vertex buffer, uniform, or texture.
//! This module is the executable reference for the WGSL entry points in
//! `render/shaders/triangle.wgsl`: both must compute the same values, and
//! the unit tests here pin the contract down.
//!
//! Every function is pure. One call per vertex (or fragment), no shared
//! state, no ordering requirements between invocations.

mod fragment;
mod vertex;

pub use fragment::resolve;
pub use vertex::{Variant, VertexRecord};
