//! Window management subsystem
//!
//! Applications and the engine loop only see the [`WindowBackend`] trait.
//! [`GlfwWindow`] is the desktop implementation; [`ScriptedWindow`] replays a
//! fixed event sequence without a display and drives the engine in tests.
//!
//! - **`backend`**: The backend contract
//! - **`glfw_window`**: GLFW implementation
//! - **`scripted`**: Display-less implementation

pub mod backend;
pub mod glfw_window;
pub mod scripted;

pub use backend::{WindowBackend, WindowError, WindowResult};
pub use glfw_window::GlfwWindow;
pub use scripted::ScriptedWindow;
