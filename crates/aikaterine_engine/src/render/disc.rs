//! Procedural disc rasterization
//!
//! Synthesizes the marker texture instead of loading it from disk: a filled
//! disc in one color, ringed by a one-pixel outline in another, with no
//! antialiasing.
//!
//! The boundary is traced with the midpoint circle algorithm on the half-pixel
//! lattice around the canvas center, so the disc is exactly symmetric and every
//! write lands inside the canvas. An offset `k` in `1..=radius` names the pixel
//! whose center lies `k - 0.5` away from the center line:
//!
//! ```text
//!   column:  c-3  c-2  c-1 | c   c+1  c+2
//!   offset:  -3   -2   -1  | +1  +2   +3
//! ```

use super::canvas::{Canvas, RasterError, Rgb};

/// Boundary point in the first octant, as half-pixel offsets from the center
///
/// Always satisfies `x >= y >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctantPoint {
    /// Horizontal offset
    pub x: u32,
    /// Vertical offset
    pub y: u32,
}

/// Midpoint circle tracer for one octant
///
/// Starts at `(radius, 1)` and steps `y` by one per point, pulling `x` inward
/// whenever the midpoint between the current and the next-inner pixel falls
/// outside the circle. Stops once `y` passes `x`, so it yields at most
/// `radius` points.
///
/// The decision term is `4(x - 1)^2 + (2y - 1)^2 - 4r^2`, the doubled-coordinate
/// form of the midpoint test, kept exact in integers.
#[derive(Debug, Clone)]
pub struct MidpointOctant {
    x: i64,
    y: i64,
    decision: i64,
}

impl MidpointOctant {
    /// Trace the first octant of a circle with the given radius
    pub fn new(radius: u32) -> Self {
        let r = i64::from(radius);
        Self {
            x: r,
            y: 1,
            decision: 5 - 8 * r,
        }
    }
}

impl Iterator for MidpointOctant {
    type Item = OctantPoint;

    fn next(&mut self) -> Option<OctantPoint> {
        if self.y > self.x {
            return None;
        }

        let point = OctantPoint {
            x: self.x as u32,
            y: self.y as u32,
        };

        self.decision += 8 * self.y;
        self.y += 1;
        while self.decision > 0 && self.x >= self.y {
            self.decision += 12 - 8 * self.x;
            self.x -= 1;
        }

        Some(point)
    }
}

/// Maps half-pixel offsets to canvas coordinates
#[derive(Debug, Clone, Copy)]
struct DiscGeometry {
    center: u32,
}

impl DiscGeometry {
    /// Coordinate of the pixel at offset `+k`
    const fn positive(self, k: u32) -> u32 {
        self.center + k - 1
    }

    /// Coordinate of the pixel at offset `-k`
    const fn negative(self, k: u32) -> u32 {
        self.center - k
    }

    /// Both coordinates for offset magnitude `k`
    const fn pair(self, k: u32) -> [u32; 2] {
        [self.negative(k), self.positive(k)]
    }

    /// Columns strictly between the boundary pixels at `-k` and `+k`
    ///
    /// Empty (start past end) when `k == 1`.
    const fn interior(self, k: u32) -> (u32, u32) {
        (self.center + 1 - k, self.center + k - 2)
    }

    /// Fill the rows at `±row` between the boundary columns at `±half_width`
    fn fill_span(self, canvas: &mut Canvas, row: u32, half_width: u32, color: Rgb) {
        let (start, end) = self.interior(half_width);
        for y in self.pair(row) {
            canvas.fill_row(y, start, end, color);
        }
    }

    /// Plot the four points `(±column, ±row)`
    fn plot_mirrored(self, canvas: &mut Canvas, column: u32, row: u32, color: Rgb) {
        for x in self.pair(column) {
            for y in self.pair(row) {
                canvas.put(x, y, color);
            }
        }
    }
}

/// Rasterize a filled disc onto a new `length` x `length` canvas
///
/// The disc has radius `length / 2`. Boundary pixels get `outer`, pixels
/// strictly inside the boundary get `inner`, and everything outside keeps the
/// zero-initialized background. For odd lengths the last row and column stay
/// background.
///
/// Every traced point is mirrored into all eight octants. Spans are filled
/// before the ring is plotted so later spans never paint over the outline.
///
/// # Errors
/// [`RasterError::InvalidLength`] for `length == 0`,
/// [`RasterError::ResourceExhaustion`] when the buffer cannot be allocated.
pub fn rasterize_disc(length: u32, outer: Rgb, inner: Rgb) -> Result<Canvas, RasterError> {
    let mut canvas = Canvas::try_new(length)?;
    let radius = canvas.radius();
    let geometry = DiscGeometry { center: radius };

    let boundary: Vec<OctantPoint> = MidpointOctant::new(radius).collect();

    for point in &boundary {
        geometry.fill_span(&mut canvas, point.y, point.x, inner);
        geometry.fill_span(&mut canvas, point.x, point.y, inner);
    }

    for point in &boundary {
        geometry.plot_mirrored(&mut canvas, point.x, point.y, outer);
        geometry.plot_mirrored(&mut canvas, point.y, point.x, outer);
    }

    log::debug!(
        "Rasterized disc: length {}, radius {}, {} octant points",
        length,
        radius,
        boundary.len()
    );

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTER: Rgb = Rgb::WHITE;
    const INNER: Rgb = Rgb::new(40, 60, 160);

    /// Distance from the canvas center to the center of pixel (`x`, `y`)
    fn distance(radius: u32, x: u32, y: u32) -> f64 {
        let dx = f64::from(x) + 0.5 - f64::from(radius);
        let dy = f64::from(y) + 0.5 - f64::from(radius);
        dx.hypot(dy)
    }

    #[test]
    fn test_octant_radius_five() {
        let points: Vec<_> = MidpointOctant::new(5).map(|p| (p.x, p.y)).collect();
        assert_eq!(points, vec![(5, 1), (5, 2), (5, 3), (4, 4)]);
    }

    #[test]
    fn test_octant_stays_above_diagonal() {
        for radius in 1..200 {
            for point in MidpointOctant::new(radius) {
                assert!(point.x >= point.y, "radius {radius}: {point:?}");
                assert!(point.y >= 1 && point.x <= radius);
            }
        }
    }

    #[test]
    fn test_termination_within_radius_steps() {
        for radius in 1..500 {
            let steps = MidpointOctant::new(radius).count();
            assert!(steps >= 1 && steps <= radius as usize, "radius {radius}: {steps} steps");
        }
        assert_eq!(MidpointOctant::new(0).count(), 0);
    }

    #[test]
    fn test_scenario_ten_pixel_disc() {
        let canvas = rasterize_disc(10, Rgb::WHITE, Rgb::BLACK).unwrap();
        assert_eq!(canvas.length(), 10);

        for (x, y) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            assert!(canvas.is_color(x, y, Rgb::BLACK), "center pixel ({x}, {y})");
        }
        for (x, y) in [(0, 0), (9, 9), (0, 9), (9, 0)] {
            assert!(canvas.is_background(x, y), "corner pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_disc_containment() {
        for length in 1..=96 {
            let canvas = rasterize_disc(length, OUTER, INNER).unwrap();
            let radius = canvas.radius();
            let r = f64::from(radius);

            for y in 0..length {
                for x in 0..length {
                    let d = distance(radius, x, y);
                    if d < r - 1.0 {
                        assert!(canvas.is_color(x, y, INNER), "length {length}: ({x}, {y}) at {d:.2}");
                    } else if d > r + 1.0 {
                        assert!(canvas.is_background(x, y), "length {length}: ({x}, {y}) at {d:.2}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_eight_way_symmetry() {
        let length = 64;
        let canvas = rasterize_disc(length, OUTER, INNER).unwrap();
        let geometry = DiscGeometry { center: canvas.radius() };

        for point in MidpointOctant::new(canvas.radius()) {
            for (a, b) in [(point.x, point.y), (point.y, point.x)] {
                for x in geometry.pair(a) {
                    for y in geometry.pair(b) {
                        assert!(canvas.is_color(x, y, OUTER), "({x}, {y}) from {point:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_mirror_image_identical() {
        let canvas = rasterize_disc(50, OUTER, INNER).unwrap();
        let last = canvas.length() - 1;

        for y in 0..=last {
            for x in 0..=last {
                assert_eq!(canvas.pixel(x, y), canvas.pixel(last - x, y));
                assert_eq!(canvas.pixel(x, y), canvas.pixel(y, x));
            }
        }
    }

    #[test]
    fn test_odd_length_leaves_last_line_empty() {
        let canvas = rasterize_disc(125, OUTER, INNER).unwrap();
        assert_eq!(canvas.radius(), 62);
        for i in 0..125 {
            assert!(canvas.is_background(124, i));
            assert!(canvas.is_background(i, 124));
        }
        assert!(canvas.is_color(62, 62, INNER));
    }

    #[test]
    fn test_smallest_discs() {
        let canvas = rasterize_disc(1, OUTER, INNER).unwrap();
        assert!(canvas.is_background(0, 0));

        let canvas = rasterize_disc(2, OUTER, INNER).unwrap();
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(canvas.is_color(x, y, OUTER));
        }
    }

    #[test]
    fn test_zero_length_is_an_error() {
        assert!(matches!(rasterize_disc(0, OUTER, INNER), Err(RasterError::InvalidLength)));
    }
}
