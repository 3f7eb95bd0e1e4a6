//! Rendering support
//!
//! Everything here stays on the CPU side of the graphics boundary:
//!
//! - **`canvas`** / **`disc`**: procedural marker texture
//! - **`view_state`**: zoom and window state feeding the marker uniforms
//! - **`viewport`**: drawing regions
//! - **`texture`**: the seam to a texture-owning backend
//! - **`window`**: window backends

pub mod canvas;
pub mod disc;
pub mod texture;
pub mod view_state;
pub mod viewport;
pub mod window;

pub use canvas::{Canvas, RasterError, Rgb};
pub use disc::{rasterize_disc, MidpointOctant, OctantPoint};
pub use texture::{SoftwareTextureBackend, TextureBackend, TextureError, TextureId};
pub use view_state::{clamp_scale, ViewState, ViewUniforms, MARKER_QUAD, MARKER_TEXTURE_FACTOR};
pub use viewport::{Viewport, ViewportError};
pub use window::{GlfwWindow, ScriptedWindow, WindowBackend, WindowError};
