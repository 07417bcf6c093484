use bytemuck::{Pod, Zeroable};

use crate::coords::{Vec2, Vec4};

/// Pipeline variant, selecting what the inter-stage payload carries.
///
/// The two variants share the same triangle; they differ only in the
/// `local_coordinate` each vertex hands to the fragment stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Variant {
    /// Payload is the constant (0.3, 0.3) at every vertex, so the whole
    /// face resolves to a single color.
    Plain,
    /// Payload is the vertex position itself; the rasterizer interpolates
    /// it across the face, producing a gradient.
    Rainbow,
}

/// Per-vertex output record, consumed by rasterization/interpolation.
///
/// Layout mirrors the WGSL inter-stage struct. `clip_position.w` is always
/// 1.0 so the host's perspective division leaves x/y/z untouched.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct VertexRecord {
    pub clip_position: Vec4,
    pub local_coordinate: Vec2,
}

impl Variant {
    /// Synthesizes the vertex record for `vertex_index`.
    ///
    /// Indices 0..3 map to the corners (0.5, -0.5), (0.0, 0.5), (-0.5, -0.5).
    /// The draw call only ever supplies 0..3; other indices follow the same
    /// closed form and are simply never rasterized.
    #[inline]
    pub fn generate(self, vertex_index: u32) -> VertexRecord {
        let i = vertex_index as i32;
        let x = (1 - i) as f32 * 0.5;
        let y = ((i & 1) * 2 - 1) as f32 * 0.5;
        let position = Vec2::new(x, y);

        let local_coordinate = match self {
            Variant::Plain => Vec2::splat(0.3),
            Variant::Rainbow => position,
        };

        VertexRecord {
            clip_position: Vec4::from_xy(position),
            local_coordinate,
        }
    }

    /// WGSL vertex entry point implementing [`generate`](Self::generate).
    pub fn vertex_entry_point(self) -> &'static str {
        match self {
            Variant::Plain => "vs_plain",
            Variant::Rainbow => "vs_rainbow",
        }
    }

    /// WGSL fragment entry point paired with this variant.
    pub fn fragment_entry_point(self) -> &'static str {
        match self {
            Variant::Plain => "fs_plain",
            Variant::Rainbow => "fs_rainbow",
        }
    }

    /// The other variant.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Variant::Plain => Variant::Rainbow,
            Variant::Rainbow => Variant::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(r: VertexRecord) -> [u32; 6] {
        [
            r.clip_position.x.to_bits(),
            r.clip_position.y.to_bits(),
            r.clip_position.z.to_bits(),
            r.clip_position.w.to_bits(),
            r.local_coordinate.x.to_bits(),
            r.local_coordinate.y.to_bits(),
        ]
    }

    // ── positions ─────────────────────────────────────────────────────────

    #[test]
    fn corners_are_exact() {
        let expected = [(0.5, -0.5), (0.0, 0.5), (-0.5, -0.5)];
        for (i, (x, y)) in expected.into_iter().enumerate() {
            let r = Variant::Rainbow.generate(i as u32);
            assert_eq!(r.clip_position.x, x, "vertex {i}");
            assert_eq!(r.clip_position.y, y, "vertex {i}");
        }
    }

    #[test]
    fn positions_are_flat_and_unprojected() {
        for variant in [Variant::Plain, Variant::Rainbow] {
            for i in 0..3 {
                let r = variant.generate(i);
                assert_eq!(r.clip_position.z, 0.0);
                assert_eq!(r.clip_position.w, 1.0);
            }
        }
    }

    #[test]
    fn both_variants_share_the_triangle() {
        for i in 0..3 {
            assert_eq!(
                Variant::Plain.generate(i).clip_position,
                Variant::Rainbow.generate(i).clip_position,
            );
        }
    }

    // ── local coordinate rules ────────────────────────────────────────────

    #[test]
    fn plain_payload_is_constant() {
        for i in 0..3 {
            assert_eq!(Variant::Plain.generate(i).local_coordinate, Vec2::splat(0.3));
        }
    }

    #[test]
    fn rainbow_payload_equals_position() {
        for i in 0..3 {
            let r = Variant::Rainbow.generate(i);
            assert_eq!(r.local_coordinate, r.clip_position.xy());
        }
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn generate_is_bit_identical_across_calls() {
        for variant in [Variant::Plain, Variant::Rainbow] {
            for i in 0..3 {
                assert_eq!(bits(variant.generate(i)), bits(variant.generate(i)));
            }
        }
    }

    #[test]
    fn toggled_round_trips() {
        assert_eq!(Variant::Plain.toggled(), Variant::Rainbow);
        assert_eq!(Variant::Rainbow.toggled().toggled(), Variant::Rainbow);
    }
}
