//! # Aikaterine Engine
//!
//! Core of the Aikaterine point visualizer: every point is drawn as a small
//! textured quad whose texture is a procedurally rasterized disc, zoomable with
//! the scroll wheel, under a declarative UI overlay.
//!
//! ## Features
//!
//! - **Marker rasterization**: midpoint-circle disc with a distinct ring color
//! - **UI element trees**: owned, weighted layout trees with safe teardown
//! - **View state**: zoom clamping and the marker vertex transform
//! - **Configuration**: TOML or RON settings with defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aikaterine_engine::prelude::*;
//!
//! struct Viewer;
//!
//! impl Application for Viewer {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         log::info!("Marker texture is {} px", engine.marker_length());
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     Engine::run(config, &mut Viewer)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod foundation;
pub mod model;
pub mod render;
pub mod ui;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{ApplicationConfig, Config, ConfigError},
        foundation::math::Vec2,
        model::{PositionPolar, PositionRectangular, Virtue, VirtueNode},
        render::{rasterize_disc, Canvas, RasterError, Rgb, ViewState},
        ui::{ConfigurationError, GroupBuilder, UIDescription, UIElement},
        AppError, AppEvent, Application, Engine, EngineError,
    };
}
