//! Serializable form of UI trees
//!
//! Overlay layouts can be written by hand in RON or TOML. The file format
//! keeps a group's children and weights as two separate lists, and a scaled
//! wrapper's child is optional, so a description can be malformed in ways a
//! [`UIElement`] cannot. Conversion validates both.
//!
//! ```ron
//! Vertical(
//!     children: [Text("Aikaterine"), Button],
//!     weights: [1.0, 2.0],
//! )
//! ```

use serde::{Deserialize, Serialize};

use super::element::{Group, UIElement};
use super::error::ConfigurationError;
use crate::config::Config;

/// Unvalidated UI tree as read from a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UIDescription {
    /// Scale wrapper
    Scaled {
        /// Wrapped description
        #[serde(default)]
        child: Option<Box<UIDescription>>,
        /// Horizontal and vertical factor
        scale: (f32, f32),
    },
    /// Top-to-bottom group
    Vertical {
        /// Children in order
        #[serde(default)]
        children: Vec<UIDescription>,
        /// One weight per child
        #[serde(default)]
        weights: Vec<f32>,
    },
    /// Left-to-right group
    Horizontal {
        /// Children in order
        #[serde(default)]
        children: Vec<UIDescription>,
        /// One weight per child
        #[serde(default)]
        weights: Vec<f32>,
    },
    /// Text leaf
    Text(String),
    /// Button leaf
    Button,
}

impl Default for UIDescription {
    fn default() -> Self {
        Self::Vertical {
            children: Vec::new(),
            weights: Vec::new(),
        }
    }
}

impl Config for UIDescription {}

impl UIDescription {
    /// Validate and build the element tree
    ///
    /// # Errors
    /// [`ConfigurationError::MissingChild`] for a scaled wrapper without a
    /// child, [`ConfigurationError::MismatchedWeights`] for groups whose lists
    /// differ in length, plus the errors of the [`UIElement`] constructors.
    pub fn build(self) -> Result<UIElement, ConfigurationError> {
        match self {
            Self::Scaled { child, scale: (x, y) } => {
                let child = child.ok_or(ConfigurationError::MissingChild)?;
                UIElement::scaled(child.build()?, x, y)
            }
            Self::Vertical { children, weights } => {
                UIElement::vertical_from_parts(Self::build_all(children)?, weights)
            }
            Self::Horizontal { children, weights } => {
                UIElement::horizontal_from_parts(Self::build_all(children)?, weights)
            }
            Self::Text(content) => Ok(UIElement::Text(content)),
            Self::Button => Ok(UIElement::Button),
        }
    }

    fn build_all(children: Vec<Self>) -> Result<Vec<UIElement>, ConfigurationError> {
        children.into_iter().map(Self::build).collect()
    }
}

impl TryFrom<UIDescription> for UIElement {
    type Error = ConfigurationError;

    fn try_from(description: UIDescription) -> Result<Self, Self::Error> {
        description.build()
    }
}

impl From<UIElement> for UIDescription {
    fn from(mut element: UIElement) -> Self {
        match &mut element {
            UIElement::Scaled { child, scale } => Self::Scaled {
                child: Some(Box::new(Self::from(std::mem::replace(&mut **child, UIElement::Button)))),
                scale: (scale.x, scale.y),
            },
            UIElement::Vertical(group) => {
                let (children, weights) = split_group(std::mem::take(group));
                Self::Vertical { children, weights }
            }
            UIElement::Horizontal(group) => {
                let (children, weights) = split_group(std::mem::take(group));
                Self::Horizontal { children, weights }
            }
            UIElement::Text(content) => Self::Text(std::mem::take(content)),
            UIElement::Button => Self::Button,
        }
    }
}

fn split_group(group: Group) -> (Vec<UIDescription>, Vec<f32>) {
    group
        .into_entries()
        .into_iter()
        .map(|entry| {
            let (element, weight) = entry.into_parts();
            (UIDescription::from(element), weight)
        })
        .unzip()
}
