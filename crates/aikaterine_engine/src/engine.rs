//! Core engine implementation
//!
//! The engine owns the window, the view state and the marker texture. Startup
//! rasterizes the marker disc once, sized for the largest zoom level, and
//! hands it to the texture backend together with its mipmaps. The main loop
//! then only feeds window events into the view state and calls the
//! application.

use thiserror::Error;

use crate::{
    application::{AppError, AppEvent, Application},
    config::ConfigError,
    core::config::ApplicationConfig,
    foundation::time::FrameTimer,
    render::{
        canvas::RasterError,
        disc::rasterize_disc,
        texture::{upload_with_mipmaps, SoftwareTextureBackend, TextureBackend, TextureError, TextureId},
        view_state::ViewState,
        viewport::Viewport,
        window::{GlfwWindow, WindowBackend, WindowError},
    },
};

/// Upper bound on how long one frame waits for window events, in seconds
const EVENT_WAIT_TIMEOUT: f64 = 1.0 / 60.0;

/// Main engine struct
pub struct Engine {
    window: Box<dyn WindowBackend>,
    textures: Box<dyn TextureBackend>,
    view: ViewState,
    marker: Option<TextureId>,
    marker_length: u32,
    config: ApplicationConfig,
    timer: FrameTimer,
    running: bool,
}

impl Engine {
    /// Create an engine with a GLFW window and CPU-side textures
    pub fn new(config: ApplicationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let window = GlfwWindow::new(&config.window)?;
        Self::with_backends(config, Box::new(window), Box::new(SoftwareTextureBackend::new()))
    }

    /// Create an engine on top of the given window and texture backends
    ///
    /// Rasterizes the marker and uploads it before returning.
    pub fn with_backends(
        config: ApplicationConfig,
        mut window: Box<dyn WindowBackend>,
        mut textures: Box<dyn TextureBackend>,
    ) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        config.validate()?;

        window.set_title(&config.window.title);
        let (width, height) = window.framebuffer_size();
        let (width, height) = if width == 0 || height == 0 {
            (config.window.width, config.window.height)
        } else {
            (width, height)
        };
        let view = ViewState::new(&config.view, width, height);

        let marker_length = view.marker_texture_length();
        let canvas = rasterize_disc(marker_length, config.marker.outer, config.marker.inner)?;
        if let Some(path) = &config.marker.dump_png {
            canvas.save_png(path)?;
            log::info!("Wrote marker texture to {}", path);
        }
        let marker = upload_with_mipmaps(textures.as_mut(), &canvas)?;

        Ok(Self {
            window,
            textures,
            view,
            marker: Some(marker),
            marker_length,
            config,
            timer: FrameTimer::new(),
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: ApplicationConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;
        engine.run_app(app)
    }

    /// Drive an application until the window closes or the engine is stopped
    ///
    /// Releases the marker texture on the way out, also when the application
    /// fails. A loop error takes precedence over a failed release.
    pub fn run_app<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        let result = self.main_loop(app);
        app.cleanup(self);
        let released = self.release_marker();

        if let (Err(_), Err(e)) = (&result, &released) {
            log::error!("Failed to release marker texture during shutdown: {e}");
        }
        log::info!("Engine shutdown complete");
        result.and(released)
    }

    fn main_loop<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        app.initialize(self)
            .map_err(|e| EngineError::Application(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");

        while self.is_running() {
            self.window.wait_events_timeout(EVENT_WAIT_TIMEOUT);
            for event in self.window.drain_events() {
                app.handle_event(self, event)
                    .map_err(|e| EngineError::Application(format!("App event: {e}")))?;
            }

            let delta_time = self.timer.tick();
            app.update(self, delta_time)
                .map_err(|e| EngineError::Application(format!("App update: {e}")))?;
        }

        log::info!("Main loop finished after {} frames", self.timer.frame_count());
        Ok(())
    }

    fn release_marker(&mut self) -> Result<(), EngineError> {
        if let Some(id) = self.marker.take() {
            self.textures.destroy_texture(id)?;
        }
        Ok(())
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: &AppEvent) -> Result<(), AppError> {
        match *event {
            AppEvent::WindowResized { width, height } => {
                self.view.resize(width, height);
            }
            AppEvent::Scrolled { delta } => {
                self.view.apply_scroll(delta);
            }
            AppEvent::CloseRequested => {
                self.quit();
            }
        }
        Ok(())
    }

    /// Whether the loop keeps going
    pub fn is_running(&self) -> bool {
        self.running && !self.window.should_close()
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
        self.window.set_should_close(true);
    }

    /// Current zoom and window state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Viewport covering the current window
    ///
    /// `None` until the window has a non-zero size.
    pub fn root_viewport(&self) -> Option<Viewport> {
        let (width, height) = self.view.window_size();
        Viewport::root(width as i32, height as i32).ok()
    }

    /// Handle of the uploaded marker texture, `None` after shutdown
    pub fn marker_texture(&self) -> Option<TextureId> {
        self.marker
    }

    /// Side length of the marker texture in pixels
    pub fn marker_length(&self) -> u32 {
        self.marker_length
    }

    /// Configuration the engine was started with
    pub fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    /// Get the window
    pub fn window(&self) -> &dyn WindowBackend {
        self.window.as_ref()
    }

    /// Get mutable access to the window
    pub fn window_mut(&mut self) -> &mut dyn WindowBackend {
        self.window.as_mut()
    }

    /// Seconds between the last two frames
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window system failure
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Marker texture could not be rasterized or written
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    /// Texture backend failure
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Application error
    #[error("Application error: {0}")]
    Application(String),
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::render::canvas::Canvas;
    use crate::render::window::ScriptedWindow;

    /// Software backend that records what the engine does with it
    #[derive(Default)]
    struct RecordingBackend {
        inner: SoftwareTextureBackend,
        log: Rc<RefCell<Vec<String>>>,
        lose_textures: bool,
    }

    impl TextureBackend for RecordingBackend {
        fn create_texture(&mut self, canvas: &Canvas) -> Result<TextureId, TextureError> {
            self.log.borrow_mut().push(format!("create {}", canvas.length()));
            self.inner.create_texture(canvas)
        }

        fn generate_mipmaps(&mut self, id: TextureId) -> Result<usize, TextureError> {
            let levels = self.inner.generate_mipmaps(id)?;
            self.log.borrow_mut().push(format!("mipmaps {levels}"));
            Ok(levels)
        }

        fn destroy_texture(&mut self, id: TextureId) -> Result<(), TextureError> {
            self.log.borrow_mut().push("destroy".to_string());
            if self.lose_textures {
                return Err(TextureError::UnknownTexture(id));
            }
            self.inner.destroy_texture(id)
        }
    }

    #[derive(Default)]
    struct CountingApp {
        initialized: bool,
        updates: usize,
        events: Vec<AppEvent>,
        scales: Vec<f32>,
        cleaned_up: bool,
        fail_on_update: Option<usize>,
    }

    impl Application for CountingApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            self.initialized = true;
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            self.scales.push(engine.view().scale());
            if self.fail_on_update == Some(self.updates) {
                return Err(AppError::Custom("boom".to_string()));
            }
            Ok(())
        }

        fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
            self.events.push(event.clone());
            engine.handle_event(&event)
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    fn engine_with(frames: Vec<Vec<AppEvent>>) -> (Engine, Rc<RefCell<Vec<String>>>) {
        engine_with_backend(frames, RecordingBackend::default())
    }

    fn engine_with_backend(
        frames: Vec<Vec<AppEvent>>,
        backend: RecordingBackend,
    ) -> (Engine, Rc<RefCell<Vec<String>>>) {
        let log = Rc::clone(&backend.log);
        let window = ScriptedWindow::new(800, 600, frames);
        let engine =
            Engine::with_backends(ApplicationConfig::default(), Box::new(window), Box::new(backend)).unwrap();
        (engine, log)
    }

    #[test]
    fn test_startup_uploads_marker_once() {
        let (engine, log) = engine_with(Vec::new());

        assert_eq!(engine.marker_length(), 125);
        assert!(engine.marker_texture().is_some());
        assert_eq!(*log.borrow(), vec!["create 125".to_string(), "mipmaps 7".to_string()]);
        assert_eq!(engine.window().framebuffer_size(), (800, 600));
    }

    #[test]
    fn test_events_drive_view_state() {
        let frames = vec![
            vec![AppEvent::Scrolled { delta: 3.0 }],
            vec![AppEvent::Scrolled { delta: 100.0 }, AppEvent::WindowResized { width: 1024, height: 768 }],
            vec![AppEvent::WindowResized { width: 0, height: 0 }, AppEvent::Scrolled { delta: -1.0 }],
        ];
        let (mut engine, log) = engine_with(frames);
        let mut app = CountingApp::default();

        engine.run_app(&mut app).unwrap();

        assert!(app.initialized && app.cleaned_up);
        assert_eq!(app.scales[..3], [18.0, 25.0, 24.0]);
        assert_eq!(app.events.len(), 5);
        assert_eq!(engine.view().window_size(), (1024, 768));
        assert_eq!(engine.root_viewport().map(|v| (v.width(), v.height())), Some((1024, 768)));
        assert_eq!(engine.marker_texture(), None);
        assert_eq!(log.borrow().last().map(String::as_str), Some("destroy"));
    }

    #[test]
    fn test_close_request_stops_loop() {
        let frames = vec![vec![], vec![AppEvent::CloseRequested], vec![], vec![]];
        let (mut engine, _) = engine_with(frames);
        let mut app = CountingApp::default();

        engine.run_app(&mut app).unwrap();

        assert_eq!(app.updates, 2);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_app_failure_still_cleans_up() {
        let frames = vec![vec![]; 5];
        let (mut engine, log) = engine_with(frames);
        let mut app = CountingApp {
            fail_on_update: Some(2),
            ..CountingApp::default()
        };

        let err = engine.run_app(&mut app).unwrap_err();

        assert!(matches!(err, EngineError::Application(ref message) if message.contains("boom")));
        assert!(app.cleaned_up);
        assert_eq!(log.borrow().last().map(String::as_str), Some("destroy"));
    }

    #[test]
    fn test_app_error_not_masked_by_release_failure() {
        let backend = RecordingBackend { lose_textures: true, ..RecordingBackend::default() };
        let (mut engine, log) = engine_with_backend(vec![vec![]; 3], backend);
        let mut app = CountingApp { fail_on_update: Some(1), ..CountingApp::default() };

        let err = engine.run_app(&mut app).unwrap_err();

        assert!(matches!(err, EngineError::Application(_)), "{err}");
        assert_eq!(log.borrow().last().map(String::as_str), Some("destroy"));
    }

    #[test]
    fn test_release_failure_reported_after_clean_run() {
        let backend = RecordingBackend { lose_textures: true, ..RecordingBackend::default() };
        let (mut engine, _) = engine_with_backend(vec![vec![]], backend);

        let err = engine.run_app(&mut CountingApp::default()).unwrap_err();
        assert!(matches!(err, EngineError::Texture(TextureError::UnknownTexture(_))));
    }

    #[test]
    fn test_marker_dumped_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marker.png");
        let mut config = ApplicationConfig::default();
        config.marker = config.marker.with_dump_png(path.to_string_lossy());
        let window = ScriptedWindow::new(800, 600, Vec::new());

        let engine =
            Engine::with_backends(config, Box::new(window), Box::new(SoftwareTextureBackend::new())).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (engine.marker_length(), engine.marker_length()));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(62, 62).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ApplicationConfig::default();
        config.view = config.view.with_limits(20.0, 10.0);
        let window = ScriptedWindow::new(800, 600, Vec::new());

        let result = Engine::with_backends(config, Box::new(window), Box::new(SoftwareTextureBackend::new()));
        assert!(matches!(result, Err(EngineError::Config(ConfigError::Invalid(_)))));
    }
}
