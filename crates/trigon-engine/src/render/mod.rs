//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, shader modules) and issue
//! commands via wgpu. There is exactly one renderer here: the procedural
//! triangle. It needs no buffers, so "owning resources" reduces to owning
//! one pipeline per variant.

mod ctx;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
