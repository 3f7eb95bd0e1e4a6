//! Application trait and lifecycle management

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::ui::ConfigurationError;

/// Application lifecycle trait
///
/// Implement this trait to drive the visualizer. The engine owns the window,
/// view state and marker texture; the application owns what is shown.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the window exists and the marker texture is uploaded.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after pending events were handled.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// The default forwards to the engine, which keeps the view state in sync.
    /// Overrides should usually forward as well.
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        engine.handle_event(&event)
    }

    /// Cleanup the application
    ///
    /// Called once when the loop ends, before the engine releases its resources.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration file could not be used
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// UI tree could not be built
    #[error("UI error: {0}")]
    Ui(#[from] ConfigurationError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Framebuffer was resized
    WindowResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// Vertical scroll input, positive away from the user
    Scrolled {
        /// Wheel notches
        delta: f64,
    },

    /// Window close requested
    CloseRequested,
}
