//! Point positions in rectangular and polar form

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Position in Cartesian coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionRectangular {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl PositionRectangular {
    /// Create a position from coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// As a vector
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Position as a distance from the origin and an angle in radians
///
/// The angle is measured counter-clockwise from the positive x axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionPolar {
    /// Distance from the origin
    pub radius: f32,
    /// Angle in radians
    pub angle: f32,
}

impl PositionPolar {
    /// Create a polar position
    pub const fn new(radius: f32, angle: f32) -> Self {
        Self { radius, angle }
    }
}

impl From<PositionPolar> for PositionRectangular {
    fn from(polar: PositionPolar) -> Self {
        let (sin, cos) = polar.angle.sin_cos();
        Self::new(cos * polar.radius, sin * polar.radius)
    }
}

impl From<PositionRectangular> for Vec2 {
    fn from(position: PositionRectangular) -> Self {
        position.to_vec2()
    }
}
