//! Texture upload seam
//!
//! The rasterizer never talks to a graphics API. Its canvas is handed to a
//! [`TextureBackend`], which creates a texture from the pixels and then builds
//! mipmaps for it.
//!
//! [`SoftwareTextureBackend`] keeps textures in CPU memory. It is the backend
//! used when no GPU surface is attached and in tests.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use slotmap::SlotMap;
use thiserror::Error;

use super::canvas::Canvas;

slotmap::new_key_type! {
    /// Handle to a texture owned by a [`TextureBackend`]
    pub struct TextureId;
}

/// Texture backend errors
#[derive(Error, Debug)]
pub enum TextureError {
    /// The handle does not name a live texture
    #[error("Unknown texture handle {0:?}")]
    UnknownTexture(TextureId),
}

/// Operations the renderer needs from a graphics backend's texture store
pub trait TextureBackend {
    /// Create a texture from canvas pixels
    fn create_texture(&mut self, canvas: &Canvas) -> Result<TextureId, TextureError>;

    /// Build the mip chain for a texture, returning the number of levels
    fn generate_mipmaps(&mut self, id: TextureId) -> Result<usize, TextureError>;

    /// Release a texture
    fn destroy_texture(&mut self, id: TextureId) -> Result<(), TextureError>;
}

/// Upload a canvas and build its mipmaps
pub fn upload_with_mipmaps(backend: &mut dyn TextureBackend, canvas: &Canvas) -> Result<TextureId, TextureError> {
    let id = backend.create_texture(canvas)?;
    let levels = backend.generate_mipmaps(id)?;
    log::info!(
        "Uploaded {}x{} texture with {} mip levels",
        canvas.length(),
        canvas.length(),
        levels
    );
    Ok(id)
}

/// CPU-side texture with its mip chain
#[derive(Debug, Clone)]
pub struct SoftwareTexture {
    levels: Vec<RgbaImage>,
}

impl SoftwareTexture {
    /// Full-resolution level
    pub fn base(&self) -> &RgbaImage {
        &self.levels[0]
    }

    /// All levels, largest first
    pub fn levels(&self) -> &[RgbaImage] {
        &self.levels
    }

    /// Number of mip levels including the base
    pub fn mip_count(&self) -> usize {
        self.levels.len()
    }
}

/// Texture store backed by CPU memory
#[derive(Debug, Default)]
pub struct SoftwareTextureBackend {
    textures: SlotMap<TextureId, SoftwareTexture>,
}

impl SoftwareTextureBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a texture
    pub fn texture(&self, id: TextureId) -> Option<&SoftwareTexture> {
        self.textures.get(id)
    }

    /// Number of live textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no textures are alive
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureBackend for SoftwareTextureBackend {
    fn create_texture(&mut self, canvas: &Canvas) -> Result<TextureId, TextureError> {
        let base = canvas.as_image().clone();
        Ok(self.textures.insert(SoftwareTexture { levels: vec![base] }))
    }

    fn generate_mipmaps(&mut self, id: TextureId) -> Result<usize, TextureError> {
        let texture = self.textures.get_mut(id).ok_or(TextureError::UnknownTexture(id))?;
        texture.levels.truncate(1);

        loop {
            let previous = &texture.levels[texture.levels.len() - 1];
            let (width, height) = previous.dimensions();
            if width <= 1 && height <= 1 {
                break;
            }
            let next = imageops::resize(previous, (width / 2).max(1), (height / 2).max(1), FilterType::Triangle);
            texture.levels.push(next);
        }

        Ok(texture.levels.len())
    }

    fn destroy_texture(&mut self, id: TextureId) -> Result<(), TextureError> {
        self.textures
            .remove(id)
            .map(|_| ())
            .ok_or(TextureError::UnknownTexture(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::Rgb;
    use crate::render::disc::rasterize_disc;

    #[test]
    fn test_upload_builds_full_mip_chain() {
        let canvas = rasterize_disc(125, Rgb::WHITE, Rgb::BLACK).unwrap();
        let mut backend = SoftwareTextureBackend::new();

        let id = upload_with_mipmaps(&mut backend, &canvas).unwrap();
        let texture = backend.texture(id).unwrap();

        let sizes: Vec<u32> = texture.levels().iter().map(RgbaImage::width).collect();
        assert_eq!(sizes, vec![125, 62, 31, 15, 7, 3, 1]);
        assert_eq!(texture.base().as_raw(), canvas.as_bytes());
    }

    #[test]
    fn test_regenerating_mipmaps_is_stable() {
        let canvas = rasterize_disc(16, Rgb::WHITE, Rgb::BLACK).unwrap();
        let mut backend = SoftwareTextureBackend::new();
        let id = backend.create_texture(&canvas).unwrap();

        assert_eq!(backend.generate_mipmaps(id).unwrap(), 5);
        assert_eq!(backend.generate_mipmaps(id).unwrap(), 5);
    }

    #[test]
    fn test_destroyed_texture_is_unknown() {
        let canvas = rasterize_disc(4, Rgb::WHITE, Rgb::BLACK).unwrap();
        let mut backend = SoftwareTextureBackend::new();
        let id = backend.create_texture(&canvas).unwrap();

        backend.destroy_texture(id).unwrap();
        assert!(backend.is_empty());
        assert!(matches!(backend.generate_mipmaps(id), Err(TextureError::UnknownTexture(_))));
        assert!(backend.destroy_texture(id).is_err());
    }
}
