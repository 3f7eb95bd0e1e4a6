//! # Core Engine Module
//!
//! Shared settings that every subsystem reads at startup.
//!
//! - **Config**: application, window, view, marker and overlay settings

pub mod config;

pub use crate::foundation;

pub use config::{
    ApplicationConfig,
    Config,
    ConfigError,
    EngineConfig,
    MarkerConfig,
    UiConfig,
    ViewConfig,
    WindowConfig,
};
