//! Aikaterine point visualizer
//!
//! Shows the four cardinal virtues as marker discs around the origin under a
//! small overlay. Scroll to zoom, Escape or close the window to quit.
//!
//! Settings are read from `resources/config/aikaterine.toml` when it exists.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use aikaterine_engine::foundation::logging;
use aikaterine_engine::prelude::*;
use aikaterine_engine::render::view_state::vertex_bytes;

const DEFAULT_CONFIG_PATH: &str = "resources/config/aikaterine.toml";

/// Overlay used when the configuration names no overlay file
fn default_overlay() -> Result<UIElement, ConfigurationError> {
    let controls = GroupBuilder::new()
        .child(UIElement::button(), 1.0)
        .child(UIElement::button(), 1.0)
        .build_horizontal()?;

    GroupBuilder::new()
        .child(UIElement::scaled(UIElement::text("Aikaterine"), 2.0, 2.0)?, 1.0)
        .child(controls, 4.0)
        .build_vertical()
}

fn cardinal_virtues() -> Vec<VirtueNode> {
    [
        ("Prudence", "Acting with good judgement", Rgb::new(70, 110, 220)),
        ("Justice", "Giving each their due", Rgb::new(220, 180, 60)),
        ("Temperance", "Moderation in desire", Rgb::new(80, 190, 120)),
        ("Fortitude", "Courage in the face of fear", Rgb::new(210, 70, 70)),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, description, color))| {
        let position = PositionPolar::new(3.0, i as f32 * FRAC_PI_2);
        VirtueNode::new(Virtue::new(name, description), position, color)
    })
    .collect()
}

struct VisualizerApp {
    nodes: Vec<VirtueNode>,
    overlay: Option<UIElement>,
    last_scale: f32,
}

impl VisualizerApp {
    fn new() -> Self {
        Self {
            nodes: cardinal_virtues(),
            overlay: None,
            last_scale: 0.0,
        }
    }

    fn load_overlay(path: Option<&str>) -> Result<UIElement, AppError> {
        match path {
            Some(path) => {
                log::info!("Loading overlay from {}", path);
                Ok(UIDescription::load_from_file(path)?.build()?)
            }
            None => Ok(default_overlay()?),
        }
    }
}

impl Application for VisualizerApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let overlay = Self::load_overlay(engine.config().ui.overlay_path.as_deref())?;
        log::info!("Overlay has {} elements", overlay.node_count());
        self.overlay = Some(overlay);

        log::info!(
            "Showing {} virtues with a {}px marker",
            self.nodes.len(),
            engine.marker_length()
        );
        if let Some(viewport) = engine.root_viewport() {
            log::debug!("Root viewport {}x{}", viewport.width(), viewport.height());
        }
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        let scale = engine.view().scale();
        if (scale - self.last_scale).abs() > f32::EPSILON {
            self.last_scale = scale;
            let title = format!("{} ({scale:.0}x)", engine.config().window.title);
            engine.window_mut().set_title(&title);

            let quad = engine.view().marker_vertices_ndc();
            log::debug!(
                "Marker quad {} bytes, uniforms {:?}",
                vertex_bytes(&quad).len(),
                engine.view().uniforms()
            );

            for node in &self.nodes {
                let ndc = node.ndc_position(engine.view());
                log::debug!("{} at ({:.3}, {:.3})", node.name(), ndc.x, ndc.y);
            }
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        if let Some(overlay) = self.overlay.take() {
            let teardown = overlay.destroy();
            log::info!(
                "Released {} overlay elements and {} child lists",
                teardown.nodes_released,
                teardown.lists_released
            );
        }
    }
}

/// Load settings and start logging at the configured level
///
/// Logging starts either way, so a broken file is reported before exiting.
fn load_config(path: &Path) -> Result<ApplicationConfig, ConfigError> {
    match ApplicationConfig::load_or_default(path) {
        Ok(config) => {
            logging::init_with_level(&config.engine.log_level);
            if path.exists() {
                log::info!("Loaded configuration from {}", path.display());
            } else {
                log::info!("No configuration at {}, using defaults", path.display());
            }
            Ok(config)
        }
        Err(e) => {
            logging::init();
            log::error!("Failed to load configuration from {}: {}", path.display(), e);
            Err(e)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(Path::new(DEFAULT_CONFIG_PATH))?;

    log::info!("Starting Aikaterine");

    let mut app = VisualizerApp::new();
    if let Err(e) = Engine::run(config, &mut app) {
        log::error!("Visualizer failed: {}", e);
        return Err(e.into());
    }

    log::info!("Aikaterine finished");
    Ok(())
}
