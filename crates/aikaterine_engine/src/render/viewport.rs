//! Rectangular drawing regions
//!
//! Offsets are measured from the bottom-left corner of the parent, in pixels,
//! matching the convention of the drawing backend.

use thiserror::Error;

/// Viewport construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// Offset below zero
    #[error("Viewport offset must not be negative, got ({x}, {y})")]
    NegativeOffset {
        /// Requested x-offset
        x: i32,
        /// Requested y-offset
        y: i32,
    },

    /// Width or height of zero or less
    #[error("Viewport size must be positive, got {width}x{height}")]
    EmptySize {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// Region extends past the parent's bounds
    #[error("Viewport {width}x{height} at ({x}, {y}) does not fit in a {parent_width}x{parent_height} parent")]
    OutOfBounds {
        /// Requested x-offset
        x: i32,
        /// Requested y-offset
        y: i32,
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
        /// Parent width
        parent_width: i32,
        /// Parent height
        parent_height: i32,
    },
}

/// A drawing region inside a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    is_root: bool,
}

impl Viewport {
    fn validated(x: i32, y: i32, width: i32, height: i32, is_root: bool) -> Result<Self, ViewportError> {
        if x < 0 || y < 0 {
            return Err(ViewportError::NegativeOffset { x, y });
        }
        if width <= 0 || height <= 0 {
            return Err(ViewportError::EmptySize { width, height });
        }
        Ok(Self { x, y, width, height, is_root })
    }

    /// Root viewport covering a whole framebuffer
    pub fn root(width: i32, height: i32) -> Result<Self, ViewportError> {
        Self::validated(0, 0, width, height, true)
    }

    /// Create a region inside this viewport
    ///
    /// Offsets are relative to this viewport's bottom-left corner.
    pub fn sub_viewport(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Self, ViewportError> {
        Self::validated(x, y, width, height, false)?;
        let fits_x = x.checked_add(width).is_some_and(|right| right <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|top| top <= self.height);
        if !fits_x || !fits_y {
            return Err(ViewportError::OutOfBounds {
                x,
                y,
                width,
                height,
                parent_width: self.width,
                parent_height: self.height,
            });
        }
        Self::validated(self.x + x, self.y + y, width, height, false)
    }

    /// Offset `(x, y)` from the framebuffer's bottom-left corner
    pub fn offset(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether this viewport belongs to a window rather than a view
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_viewport() {
        let root = Viewport::root(800, 600).unwrap();
        assert!(root.is_root());
        assert_eq!(root.offset(), (0, 0));
        assert_eq!((root.width(), root.height()), (800, 600));
    }

    #[test]
    fn test_sub_viewport_is_absolute_and_not_root() {
        let root = Viewport::root(800, 600).unwrap();
        let panel = root.sub_viewport(100, 50, 200, 100).unwrap();
        let inner = panel.sub_viewport(10, 10, 50, 50).unwrap();

        assert!(!panel.is_root());
        assert_eq!(inner.offset(), (110, 60));
    }

    #[test]
    fn test_sub_viewport_must_fit() {
        let root = Viewport::root(800, 600).unwrap();
        assert!(root.sub_viewport(0, 0, 800, 600).is_ok());
        assert!(matches!(root.sub_viewport(700, 0, 200, 10), Err(ViewportError::OutOfBounds { .. })));
        assert!(matches!(root.sub_viewport(0, 550, 10, 100), Err(ViewportError::OutOfBounds { .. })));
        assert!(root.sub_viewport(i32::MAX, 0, 10, 10).is_err());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(Viewport::root(0, 600), Err(ViewportError::EmptySize { width: 0, height: 600 }));
        let root = Viewport::root(800, 600).unwrap();
        assert!(matches!(root.sub_viewport(-1, 0, 10, 10), Err(ViewportError::NegativeOffset { .. })));

        let panel = root.sub_viewport(100, 100, 200, 200).unwrap();
        assert!(matches!(panel.sub_viewport(-10, 0, 10, 10), Err(ViewportError::NegativeOffset { .. })));
    }
}
