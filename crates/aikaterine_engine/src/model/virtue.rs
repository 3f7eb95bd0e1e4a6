//! Virtues and their on-screen nodes

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::position::PositionRectangular;
use crate::foundation::math::Vec2;
use crate::render::canvas::Rgb;
use crate::render::view_state::ViewState;

/// A named quality with a short description
///
/// Names identify virtues: two virtues with the same name are equal whatever
/// their descriptions say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Virtue {
    /// Unique name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
}

impl Virtue {
    /// Create a virtue
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl PartialEq for Virtue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Virtue {}

impl Hash for Virtue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A virtue placed in the plane
///
/// Similar virtues should be given similar colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtueNode {
    /// The virtue shown
    pub virtue: Virtue,
    /// Where the marker is centered
    pub position: PositionRectangular,
    /// Marker tint
    pub color: Rgb,
}

impl VirtueNode {
    /// Place a virtue
    pub fn new(virtue: Virtue, position: impl Into<PositionRectangular>, color: Rgb) -> Self {
        Self {
            virtue,
            position: position.into(),
            color,
        }
    }

    /// Name of the underlying virtue
    pub fn name(&self) -> &str {
        &self.virtue.name
    }

    /// Marker center in normalized device coordinates for the current view
    pub fn ndc_position(&self, view: &ViewState) -> Vec2 {
        view.to_ndc(self.position.to_vec2())
    }
}
