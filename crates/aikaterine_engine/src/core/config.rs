//! # Application Configuration
//!
//! All settings the visualizer reads at startup, grouped by subsystem. Every
//! section has serde defaults, so a configuration file only needs to name the
//! values it changes:
//!
//! ```toml
//! [view]
//! initial_scale = 10.0
//!
//! [marker]
//! inner = { r = 200, g = 40, b = 40 }
//! ```
//!
//! ## Sections
//!
//! - **Engine**: logging
//! - **Window**: initial (and minimum) window size and title
//! - **View**: zoom limits
//! - **Marker**: disc colors and an optional PNG dump
//! - **UI**: overlay description file

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};
use crate::render::canvas::Rgb;

/// # Engine Configuration
///
/// Core engine behavior shared by every subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Window Configuration
///
/// The initial size doubles as the minimum size: the window can grow but
/// never shrink below what it opened with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width in screen coordinates
    pub width: u32,
    /// Initial height in screen coordinates
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Allow or forbid resizing
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Aikaterine".to_string(),
            resizable: true,
        }
    }
}

/// # View Configuration
///
/// Zoom limits for the point display. Scroll input moves the scale one unit
/// per wheel notch, clamped to `[min_scale, max_scale]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Smallest scale factor
    pub min_scale: f32,
    /// Largest scale factor, which also sizes the marker texture
    pub max_scale: f32,
    /// Scale at startup
    pub initial_scale: f32,
}

impl ViewConfig {
    /// Set the scale limits
    #[must_use]
    pub fn with_limits(mut self, min_scale: f32, max_scale: f32) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Set the startup scale
    #[must_use]
    pub fn with_initial_scale(mut self, scale: f32) -> Self {
        self.initial_scale = scale;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [self.min_scale, self.max_scale, self.initial_scale];
        if values.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Scale values must be finite and positive, got {values:?}"
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "Minimum scale {} exceeds maximum scale {}",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_scale: 5.0,
            max_scale: 25.0,
            initial_scale: 15.0,
        }
    }
}

/// # Marker Configuration
///
/// Colors of the rasterized disc used to draw every point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Ring color
    pub outer: Rgb,
    /// Interior color
    pub inner: Rgb,
    /// Write the rasterized marker to this PNG file at startup
    pub dump_png: Option<String>,
}

impl MarkerConfig {
    /// Set both colors
    #[must_use]
    pub fn with_colors(mut self, outer: Rgb, inner: Rgb) -> Self {
        self.outer = outer;
        self.inner = inner;
        self
    }

    /// Dump the marker to a PNG file
    #[must_use]
    pub fn with_dump_png(mut self, path: impl Into<String>) -> Self {
        self.dump_png = Some(path.into());
        self
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            outer: Rgb::BLACK,
            inner: Rgb::WHITE,
            dump_png: None,
        }
    }
}

/// # UI Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// RON or TOML file holding the overlay tree
    pub overlay_path: Option<String>,
}

impl UiConfig {
    /// Load the overlay from a file
    #[must_use]
    pub fn with_overlay(mut self, path: impl Into<String>) -> Self {
        self.overlay_path = Some(path.into());
        self
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Window configuration
    pub window: WindowConfig,
    /// Zoom configuration
    pub view: ViewConfig,
    /// Marker texture configuration
    pub marker: MarkerConfig,
    /// Overlay configuration
    pub ui: UiConfig,
}

impl ApplicationConfig {
    /// Create a configuration with a custom window title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            window: WindowConfig::default().with_title(title),
            ..Self::default()
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.view.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}
