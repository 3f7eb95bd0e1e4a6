//! View state shared between input handling and the marker draw
//!
//! Holds everything the marker vertex stage reads: zoom scale and window
//! dimensions. Input events update it; the renderer reads [`ViewUniforms`]
//! from it each frame.

use crate::core::config::ViewConfig;
use crate::foundation::math::{clamp_f32, Vec2};

/// Marker size in pixels per unit of zoom scale
///
/// The vertex stage multiplies positions by this factor times the current
/// scale, and the marker texture is rasterized at this factor times the
/// maximum scale so it is never magnified.
pub const MARKER_TEXTURE_FACTOR: f32 = 5.0;

/// Interleaved marker vertex: position `[x, y]` followed by texture coordinates `[u, v]`
pub type MarkerVertex = [f32; 4];

/// Two triangles covering `[-0.5, 0.5]^2`
///
/// Texture coordinates follow the canvas convention, `v = 0` at the top row.
pub const MARKER_QUAD: [MarkerVertex; 6] = [
    [0.5, 0.5, 1.0, 0.0],
    [0.5, -0.5, 1.0, 1.0],
    [-0.5, 0.5, 0.0, 0.0],
    [0.5, -0.5, 1.0, 1.0],
    [-0.5, -0.5, 0.0, 1.0],
    [-0.5, 0.5, 0.0, 0.0],
];

/// View bytes of marker vertices for buffer upload
pub fn vertex_bytes(vertices: &[MarkerVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Apply a scroll delta to a zoom scale, clamped into `[min, max]`
pub fn clamp_scale(current: f32, delta: f32, min: f32, max: f32) -> f32 {
    clamp_f32(current + delta, min, max)
}

/// Values pushed to the marker shader uniforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewUniforms {
    /// `scale` uniform
    pub scale: f32,
    /// `windowX` uniform
    pub window_x: i32,
    /// `windowY` uniform
    pub window_y: i32,
}

/// Zoom and window state for one window
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    scale: f32,
    min_scale: f32,
    max_scale: f32,
    window_width: u32,
    window_height: u32,
}

impl ViewState {
    /// Create view state from zoom settings and the initial window size
    ///
    /// The initial scale is clamped into the configured range.
    pub fn new(config: &ViewConfig, window_width: u32, window_height: u32) -> Self {
        Self {
            scale: clamp_f32(config.initial_scale, config.min_scale, config.max_scale),
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            window_width: window_width.max(1),
            window_height: window_height.max(1),
        }
    }

    /// Current zoom scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Zoom range `(min, max)`
    pub fn scale_limits(&self) -> (f32, f32) {
        (self.min_scale, self.max_scale)
    }

    /// Current window size in pixels
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Apply a scroll delta and return the new scale
    pub fn apply_scroll(&mut self, delta: f64) -> f32 {
        let previous = self.scale;
        self.scale = clamp_scale(self.scale, delta as f32, self.min_scale, self.max_scale);
        if (self.scale - previous).abs() > f32::EPSILON {
            log::debug!("Zoom scale {:.2} -> {:.2}", previous, self.scale);
        }
        self.scale
    }

    /// Record a new window size
    ///
    /// Zero-sized updates (minimized windows) keep the previous size so the
    /// vertex transform never divides by zero. Returns whether the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::debug!("Ignoring zero-sized resize to {}x{}", width, height);
            return false;
        }
        if (width, height) == (self.window_width, self.window_height) {
            return false;
        }
        log::debug!("Window resized to {}x{}", width, height);
        self.window_width = width;
        self.window_height = height;
        true
    }

    /// Uniform values for the current state
    pub fn uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            scale: self.scale,
            window_x: self.window_width as i32,
            window_y: self.window_height as i32,
        }
    }

    /// Side length of the marker texture for this zoom range
    pub fn marker_texture_length(&self) -> u32 {
        (MARKER_TEXTURE_FACTOR * self.max_scale).round().max(1.0) as u32
    }

    /// Map a marker-space position to normalized device coordinates
    ///
    /// Same transform as the marker vertex stage:
    /// `5 * scale * pos / (windowX, windowY)`.
    pub fn to_ndc(&self, position: Vec2) -> Vec2 {
        let window = Vec2::new(self.window_width as f32, self.window_height as f32);
        (position * MARKER_TEXTURE_FACTOR * self.scale).component_div(&window)
    }

    /// Marker quad transformed into normalized device coordinates
    pub fn marker_vertices_ndc(&self) -> [MarkerVertex; 6] {
        MARKER_QUAD.map(|[x, y, u, v]| {
            let ndc = self.to_ndc(Vec2::new(x, y));
            [ndc.x, ndc.y, u, v]
        })
    }
}
