//! Incremental group construction

use super::element::UIElement;
use super::error::ConfigurationError;

/// Collects `(child, weight)` pairs for a vertical or horizontal group
///
/// ```
/// use aikaterine_engine::ui::{GroupBuilder, UIElement};
///
/// let menu = GroupBuilder::new()
///     .child(UIElement::text("Zoom"), 1.0)
///     .child(UIElement::button(), 2.0)
///     .build_vertical()
///     .unwrap();
/// assert_eq!(menu.node_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    entries: Vec<(UIElement, f32)>,
}

impl GroupBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` children
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append a child
    #[must_use]
    pub fn child(mut self, element: UIElement, weight: f32) -> Self {
        self.entries.push((element, weight));
        self
    }

    /// Append a child in place
    pub fn push(&mut self, element: UIElement, weight: f32) -> &mut Self {
        self.entries.push((element, weight));
        self
    }

    /// Number of children added so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no children were added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish as a vertical group
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidWeight`] for a negative or non-finite weight.
    pub fn build_vertical(self) -> Result<UIElement, ConfigurationError> {
        UIElement::vertical(self.entries)
    }

    /// Finish as a horizontal group
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidWeight`] for a negative or non-finite weight.
    pub fn build_horizontal(self) -> Result<UIElement, ConfigurationError> {
        UIElement::horizontal(self.entries)
    }
}

impl FromIterator<(UIElement, f32)> for GroupBuilder {
    fn from_iter<I: IntoIterator<Item = (UIElement, f32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ElementKind;

    #[test]
    fn test_builder_preserves_order() {
        let mut builder = GroupBuilder::with_capacity(3);
        for label in ["one", "two", "three"] {
            builder.push(UIElement::text(label), 1.0);
        }
        assert_eq!(builder.len(), 3);

        let row = builder.build_horizontal().unwrap();
        let labels: Vec<_> = row.group().unwrap().children().filter_map(UIElement::as_text).collect();
        assert_eq!(labels, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_builder_propagates_weight_errors() {
        let result = GroupBuilder::new().child(UIElement::button(), -2.0).build_vertical();
        assert!(result.is_err());
    }

    #[test]
    fn test_collect_into_builder() {
        let column = (1..=4)
            .map(|i| (UIElement::button(), i as f32))
            .collect::<GroupBuilder>()
            .build_vertical()
            .unwrap();

        assert_eq!(column.kind(), ElementKind::Vertical);
        assert_eq!(column.group().unwrap().total_weight(), 10.0);
    }
}
