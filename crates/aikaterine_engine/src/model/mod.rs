//! Points shown by the visualizer
//!
//! Each [`VirtueNode`] is drawn as one marker disc at its position, tinted
//! with its color.

pub mod position;
pub mod virtue;

pub use position::{PositionPolar, PositionRectangular};
pub use virtue::{Virtue, VirtueNode};
