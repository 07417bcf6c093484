use crate::coords::Vec2;
use crate::paint::Color;

/// Resolves the final fragment color from the interpolated payload.
///
/// Red and green are the payload components verbatim, blue is fixed at 0.1,
/// alpha is opaque. Intentionally unclamped: the rainbow variant feeds raw
/// triangle coordinates (roughly [-0.5, 0.5]) through here, and negative
/// channels are left for the surface's color pipeline to handle.
#[inline]
pub fn resolve(local_coordinate: Vec2) -> Color {
    Color::new(local_coordinate.x, local_coordinate.y, 0.1, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Variant;

    #[test]
    fn fixed_channels() {
        for lc in [Vec2::zero(), Vec2::splat(0.3), Vec2::new(-0.5, 0.5), Vec2::new(7.0, -3.0)] {
            let c = resolve(lc);
            assert_eq!(c.b, 0.1);
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn plain_color_at_any_fragment() {
        // Plain payload is constant, so interpolation is the identity and every
        // fragment resolves to the same color.
        let lc = Variant::Plain.generate(1).local_coordinate;
        assert_eq!(resolve(lc), Color::new(0.3, 0.3, 0.1, 1.0));
    }

    #[test]
    fn rainbow_color_at_a_lower_corner() {
        // At an exact vertex the interpolated payload equals that vertex's.
        assert_eq!(resolve(Vec2::splat(-0.5)), Color::new(-0.5, -0.5, 0.1, 1.0));
    }

    #[test]
    fn payload_passes_through_unclamped() {
        let c = resolve(Vec2::new(-2.0, 3.0));
        assert_eq!((c.r, c.g), (-2.0, 3.0));
    }

    #[test]
    fn resolve_is_bit_identical_across_calls() {
        let lc = Vec2::new(0.125, -0.375);
        let (a, b) = (resolve(lc), resolve(lc));
        assert_eq!(
            [a.r.to_bits(), a.g.to_bits(), a.b.to_bits(), a.a.to_bits()],
            [b.r.to_bits(), b.g.to_bits(), b.b.to_bits(), b.a.to_bits()],
        );
    }
}
