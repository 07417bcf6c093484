//! Color model shared between the CPU stage functions and the host.
//!
//! Scope:
//! - straight (non-premultiplied) RGBA
//! - no gamma handling; values are whatever the stage math produced

mod color;

pub use color::Color;
