//! Backend-agnostic window management trait

use thiserror::Error;

use crate::application::AppEvent;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library could not start
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window itself could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Window operations the engine loop depends on
///
/// Implementations translate their native events into [`AppEvent`]s so the
/// rest of the engine never sees windowing-library types.
pub trait WindowBackend {
    /// Check if the window should close
    fn should_close(&self) -> bool;

    /// Request or cancel closing the window
    fn set_should_close(&mut self, should_close: bool);

    /// Process pending window system events without blocking
    fn poll_events(&mut self);

    /// Block until events arrive or `timeout` seconds pass
    fn wait_events_timeout(&mut self, timeout: f64);

    /// Take the events gathered by the last poll or wait
    fn drain_events(&mut self) -> Vec<AppEvent>;

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Set the window title
    fn set_title(&mut self, title: &str);
}
