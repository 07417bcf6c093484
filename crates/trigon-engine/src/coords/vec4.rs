use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// 4D vector, used for clip-space positions (x, y, z, w).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Builds a clip-space position from a 2D point.
    ///
    /// z is 0 and w is 1, so the host's perspective division is the identity.
    #[inline]
    pub const fn from_xy(p: Vec2) -> Self {
        Self { x: p.x, y: p.y, z: 0.0, w: 1.0 }
    }

    /// The (x, y) part.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}
