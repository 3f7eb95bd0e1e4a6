//! Window management using GLFW

use glfw::{Action, Key, WindowEvent};

use super::backend::{WindowBackend, WindowError, WindowResult};
use crate::application::AppEvent;
use crate::core::config::WindowConfig;

/// GLFW window wrapper with proper resource management
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    pending: Vec<AppEvent>,
}

impl GlfwWindow {
    /// Create a resizable window from configuration
    ///
    /// The initial size doubles as the minimum size the window can be
    /// shrunk to.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        // The marker is drawn by an external backend; no GL context here
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_size_limits(Some(config.width), Some(config.height), None, None);

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_scroll_polling(true);
        window.set_framebuffer_size_polling(true);

        log::info!("Created {}x{} window \"{}\"", config.width, config.height, config.title);

        Ok(Self {
            glfw,
            window,
            events,
            pending: Vec::new(),
        })
    }

    fn collect_events(&mut self) {
        for (_, event) in glfw::flush_messages(&self.events) {
            if let Some(app_event) = translate_event(&event) {
                self.pending.push(app_event);
            }
        }
    }
}

/// Map a GLFW event onto the events the engine handles
fn translate_event(event: &WindowEvent) -> Option<AppEvent> {
    match *event {
        WindowEvent::FramebufferSize(width, height) => Some(AppEvent::WindowResized {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }),
        WindowEvent::Scroll(_, y) => Some(AppEvent::Scrolled { delta: y }),
        WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
            Some(AppEvent::CloseRequested)
        }
        _ => None,
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
        self.collect_events();
    }

    fn wait_events_timeout(&mut self, timeout: f64) {
        self.glfw.wait_events_timeout(timeout);
        self.collect_events();
    }

    fn drain_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.pending)
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_scroll_and_resize() {
        assert_eq!(translate_event(&WindowEvent::Scroll(0.0, -2.0)), Some(AppEvent::Scrolled { delta: -2.0 }));
        assert_eq!(
            translate_event(&WindowEvent::FramebufferSize(1024, 768)),
            Some(AppEvent::WindowResized { width: 1024, height: 768 })
        );
        assert_eq!(translate_event(&WindowEvent::Close), Some(AppEvent::CloseRequested));
        assert_eq!(translate_event(&WindowEvent::Focus(true)), None);
    }
}
