//! Math utilities and types

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Clamp `value` into `[min, max]`
///
/// Unlike [`f32::clamp`] this never panics on an inverted range; the upper
/// bound wins, matching `min(max(value, min), max)`.
pub fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_and_outside() {
        assert_eq!(clamp_f32(3.0, 1.0, 5.0), 3.0);
        assert_eq!(clamp_f32(-3.0, 1.0, 5.0), 1.0);
        assert_eq!(clamp_f32(9.0, 1.0, 5.0), 5.0);
    }

    #[test]
    fn test_clamp_inverted_range_prefers_max() {
        assert_eq!(clamp_f32(3.0, 5.0, 1.0), 1.0);
    }
}
