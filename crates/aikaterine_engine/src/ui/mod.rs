//! UI element trees
//!
//! A declarative model of on-screen UI. Trees are plain data: size hints are
//! stored on group children but nothing here turns them into positions.
//!
//! - **`element`**: the [`UIElement`] tree and its traversal and teardown
//! - **`builder`**: incremental group construction
//! - **`description`**: file format for trees and its validation
//! - **`error`**: construction errors

pub mod builder;
pub mod description;
pub mod element;
pub mod error;

#[cfg(test)]
mod tests;

pub use builder::GroupBuilder;
pub use description::UIDescription;
pub use element::{ElementKind, Group, Teardown, UIElement, Walk, WeightedChild};
pub use error::ConfigurationError;
