//! Small vector types shared between the CPU stage functions and the GPU
//! interface.
//!
//! Canonical space:
//! - clip space, origin at the center
//! - +X right, +Y up
//! - w = 1.0 (no perspective anywhere in this engine)
//!
//! Both types are `Pod` so they can mirror WGSL struct layout exactly.

mod vec2;
mod vec4;

pub use vec2::Vec2;
pub use vec4::Vec4;
