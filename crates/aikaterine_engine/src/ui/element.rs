//! UI element tree
//!
//! A [`UIElement`] is an immutable description of on-screen UI: leaves (text,
//! buttons) composed into weighted vertical and horizontal groups, optionally
//! wrapped in a scale factor. Every node owns its children outright, so a tree
//! can never share a node between two parents or contain a cycle.
//!
//! Trees are built bottom-up and released either by going out of scope or with
//! [`UIElement::destroy`], which also reports what was freed. Both walk the
//! tree with an explicit stack, so tree depth is not limited by the call stack.

use serde::{Deserialize, Serialize};

use super::description::UIDescription;
use super::error::ConfigurationError;
use crate::foundation::math::Vec2;

/// Discriminator of a [`UIElement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Scale wrapper
    Scaled,
    /// Top-to-bottom group
    Vertical,
    /// Left-to-right group
    Horizontal,
    /// Text leaf
    Text,
    /// Button leaf
    Button,
}

/// A child of a group together with its relative size hint
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedChild {
    element: UIElement,
    weight: f32,
}

impl WeightedChild {
    /// The child element
    pub fn element(&self) -> &UIElement {
        &self.element
    }

    /// Relative size hint
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Split into the element and its weight
    pub fn into_parts(self) -> (UIElement, f32) {
        (self.element, self.weight)
    }
}

/// Ordered children of a vertical or horizontal group
///
/// Each child is stored with its weight, so the two always have the same count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    entries: Vec<WeightedChild>,
}

impl Group {
    fn from_pairs<I>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (UIElement, f32)>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (element, weight))| {
                if weight.is_finite() && weight >= 0.0 {
                    Ok(WeightedChild { element, weight })
                } else {
                    Err(ConfigurationError::InvalidWeight { index, weight })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    fn from_parts(children: Vec<UIElement>, weights: Vec<f32>) -> Result<Self, ConfigurationError> {
        if children.len() != weights.len() {
            return Err(ConfigurationError::MismatchedWeights {
                children: children.len(),
                weights: weights.len(),
            });
        }
        Self::from_pairs(children.into_iter().zip(weights))
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no children
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Children with their weights, in order
    pub fn entries(&self) -> &[WeightedChild] {
        &self.entries
    }

    /// Children in order
    pub fn children(&self) -> impl ExactSizeIterator<Item = &UIElement> + '_ {
        self.entries.iter().map(WeightedChild::element)
    }

    /// Weights in child order
    pub fn weights(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.entries.iter().map(WeightedChild::weight)
    }

    /// Take the children with their weights
    pub fn into_entries(self) -> Vec<WeightedChild> {
        self.entries
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f32 {
        self.weights().sum()
    }
}

/// Composable UI description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UIDescription", into = "UIDescription")]
pub enum UIElement {
    /// One child drawn with a per-axis scale factor
    Scaled {
        /// Wrapped element
        child: Box<UIElement>,
        /// Horizontal and vertical factor
        scale: Vec2,
    },
    /// Children stacked top to bottom
    Vertical(Group),
    /// Children placed left to right
    Horizontal(Group),
    /// Text label
    Text(String),
    /// Button placeholder
    Button,
}

impl UIElement {
    /// Wrap `child` with a scale factor
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidScale`] if either factor is NaN or infinite.
    pub fn scaled(child: Self, scale_x: f32, scale_y: f32) -> Result<Self, ConfigurationError> {
        if !scale_x.is_finite() || !scale_y.is_finite() {
            return Err(ConfigurationError::InvalidScale { x: scale_x, y: scale_y });
        }
        Ok(Self::Scaled {
            child: Box::new(child),
            scale: Vec2::new(scale_x, scale_y),
        })
    }

    /// Stack `(child, weight)` pairs top to bottom
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidWeight`] for a negative or non-finite weight.
    pub fn vertical<I>(children: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Self, f32)>,
    {
        Group::from_pairs(children).map(Self::Vertical)
    }

    /// Place `(child, weight)` pairs left to right
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidWeight`] for a negative or non-finite weight.
    pub fn horizontal<I>(children: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Self, f32)>,
    {
        Group::from_pairs(children).map(Self::Horizontal)
    }

    /// Vertical group from parallel child and weight lists
    ///
    /// # Errors
    /// [`ConfigurationError::MismatchedWeights`] when the lists differ in length,
    /// [`ConfigurationError::InvalidWeight`] for a bad weight.
    pub fn vertical_from_parts(children: Vec<Self>, weights: Vec<f32>) -> Result<Self, ConfigurationError> {
        Group::from_parts(children, weights).map(Self::Vertical)
    }

    /// Horizontal group from parallel child and weight lists
    ///
    /// # Errors
    /// Same as [`UIElement::vertical_from_parts`].
    pub fn horizontal_from_parts(children: Vec<Self>, weights: Vec<f32>) -> Result<Self, ConfigurationError> {
        Group::from_parts(children, weights).map(Self::Horizontal)
    }

    /// Text leaf
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Button leaf
    pub const fn button() -> Self {
        Self::Button
    }

    /// Which variant this node is
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Scaled { .. } => ElementKind::Scaled,
            Self::Vertical(_) => ElementKind::Vertical,
            Self::Horizontal(_) => ElementKind::Horizontal,
            Self::Text(_) => ElementKind::Text,
            Self::Button => ElementKind::Button,
        }
    }

    /// Group payload of a vertical or horizontal node
    pub const fn group(&self) -> Option<&Group> {
        match self {
            Self::Vertical(group) | Self::Horizontal(group) => Some(group),
            _ => None,
        }
    }

    /// Text of a text leaf
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content.as_str()),
            _ => None,
        }
    }

    /// Child and factor of a scale wrapper
    pub fn as_scaled(&self) -> Option<(&Self, Vec2)> {
        match self {
            Self::Scaled { child, scale } => Some((&**child, *scale)),
            _ => None,
        }
    }

    /// Whether this node has no children
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Button)
    }

    /// Direct children in order
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Scaled { child, .. } => vec![&**child],
            Self::Vertical(group) | Self::Horizontal(group) => group.children().collect(),
            Self::Text(_) | Self::Button => Vec::new(),
        }
    }

    /// Depth-first, pre-order walk yielding `(depth, node)`; the root has depth 0
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![(0, self)] }
    }

    /// Number of nodes in this tree, including the root
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Release the whole tree
    pub fn destroy(self) -> Teardown {
        self.destroy_with(|_| {})
    }

    /// Release the whole tree, reporting each node as it is released
    ///
    /// Nodes are released in post-order: every child before its parent, and a
    /// group's children in order. A node's own storage (its text, its child
    /// box, its child list) stays allocated until its children are gone and is
    /// freed right before `on_release` sees it. A group's child list is freed
    /// together with the group node, exactly once.
    pub fn destroy_with(self, mut on_release: impl FnMut(ElementKind)) -> Teardown {
        enum Step {
            Enter(UIElement),
            Release(UIElement),
        }

        let mut teardown = Teardown::default();
        let mut stack = vec![Step::Enter(self)];
        let mut children = Vec::new();

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(mut node) => {
                    node.detach_children(&mut children);
                    stack.push(Step::Release(node));
                    stack.extend(children.drain(..).rev().map(Step::Enter));
                }
                Step::Release(node) => {
                    let kind = node.kind();
                    drop(node);

                    teardown.nodes_released += 1;
                    if matches!(kind, ElementKind::Vertical | ElementKind::Horizontal) {
                        teardown.lists_released += 1;
                    }
                    on_release(kind);
                }
            }
        }

        teardown
    }

    /// Move this node's children into `into`, leaving the node childless
    ///
    /// The node keeps its own allocations: a group keeps its (now empty) list
    /// buffer and a scale wrapper keeps its box, holding a button placeholder.
    fn detach_children(&mut self, into: &mut Vec<Self>) {
        match self {
            Self::Scaled { child, .. } => into.push(std::mem::replace(&mut **child, Self::Button)),
            Self::Vertical(group) | Self::Horizontal(group) => {
                into.extend(group.entries.drain(..).map(|entry| entry.element));
            }
            Self::Text(_) | Self::Button => {}
        }
    }
}

impl Drop for UIElement {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        // Each popped node is childless by the time it drops, so this drop
        // never recurses more than one level.
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Counts reported by [`UIElement::destroy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Teardown {
    /// Nodes released, leaves and groups alike
    pub nodes_released: usize,
    /// Group child lists released
    pub lists_released: usize,
}

/// Pre-order iterator returned by [`UIElement::walk`]
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a UIElement)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a UIElement);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        match node {
            UIElement::Scaled { child, .. } => self.stack.push((depth + 1, &**child)),
            UIElement::Vertical(group) | UIElement::Horizontal(group) => {
                self.stack.extend(group.entries.iter().rev().map(|entry| (depth + 1, &entry.element)));
            }
            UIElement::Text(_) | UIElement::Button => {}
        }
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_scenario() {
        let root = UIElement::vertical([(UIElement::text("A"), 1.0), (UIElement::button(), 2.0)]).unwrap();

        assert_eq!(root.kind(), ElementKind::Vertical);
        let group = root.group().unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group.weights().collect::<Vec<_>>(), vec![1.0, 2.0]);

        let children: Vec<_> = group.children().collect();
        assert_eq!(children[0].as_text(), Some("A"));
        assert_eq!(children[1].kind(), ElementKind::Button);

        let teardown = root.destroy();
        assert_eq!(teardown, Teardown { nodes_released: 3, lists_released: 1 });
    }

    #[test]
    fn test_from_parts_rejects_mismatch() {
        let err = UIElement::horizontal_from_parts(vec![UIElement::button(), UIElement::button()], vec![1.0])
            .unwrap_err();
        assert_eq!(err, ConfigurationError::MismatchedWeights { children: 2, weights: 1 });

        let ok = UIElement::horizontal_from_parts(vec![UIElement::button()], vec![3.0]).unwrap();
        assert_eq!(ok.kind(), ElementKind::Horizontal);
        assert_eq!(ok.group().unwrap().total_weight(), 3.0);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let err = UIElement::vertical([(UIElement::button(), 1.0), (UIElement::button(), -1.0)]).unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidWeight { index: 1, weight: -1.0 });

        assert!(UIElement::vertical([(UIElement::button(), f32::NAN)]).is_err());
        assert!(UIElement::vertical([(UIElement::button(), f32::INFINITY)]).is_err());
        assert!(UIElement::vertical([(UIElement::button(), 0.0)]).is_ok());
    }

    #[test]
    fn test_scaled_validates_factor() {
        let scaled = UIElement::scaled(UIElement::text("x"), 2.0, 0.5).unwrap();
        let (child, scale) = scaled.as_scaled().unwrap();
        assert_eq!(child.as_text(), Some("x"));
        assert_eq!(scale, Vec2::new(2.0, 0.5));

        assert!(matches!(
            UIElement::scaled(UIElement::button(), f32::NAN, 1.0),
            Err(ConfigurationError::InvalidScale { .. })
        ));
        assert!(UIElement::scaled(UIElement::button(), 1.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_empty_group_is_allowed() {
        let root = UIElement::horizontal(Vec::new()).unwrap();
        assert!(root.group().unwrap().is_empty());
        assert_eq!(root.destroy(), Teardown { nodes_released: 1, lists_released: 1 });
    }

    #[test]
    fn test_text_owns_its_content() {
        let element = {
            let source = String::from("temporary");
            UIElement::text(source.as_str())
        };
        assert_eq!(element.as_text(), Some("temporary"));
    }

    #[test]
    fn test_walk_is_preorder_with_depths() {
        let root = UIElement::vertical([
            (UIElement::horizontal([(UIElement::text("a"), 1.0), (UIElement::button(), 1.0)]).unwrap(), 1.0),
            (UIElement::scaled(UIElement::text("b"), 2.0, 2.0).unwrap(), 1.0),
        ])
        .unwrap();

        let visited: Vec<_> = root.walk().map(|(depth, node)| (depth, node.kind())).collect();
        assert_eq!(
            visited,
            vec![
                (0, ElementKind::Vertical),
                (1, ElementKind::Horizontal),
                (2, ElementKind::Text),
                (2, ElementKind::Button),
                (1, ElementKind::Scaled),
                (2, ElementKind::Text),
            ]
        );
        assert_eq!(root.node_count(), 6);
    }

    #[test]
    fn test_destroy_is_post_order() {
        let root = UIElement::scaled(
            UIElement::horizontal([(UIElement::text("a"), 1.0), (UIElement::button(), 1.0)]).unwrap(),
            1.0,
            1.0,
        )
        .unwrap();

        let mut order = Vec::new();
        let teardown = root.destroy_with(|kind| order.push(kind));

        assert_eq!(
            order,
            vec![ElementKind::Text, ElementKind::Button, ElementKind::Horizontal, ElementKind::Scaled]
        );
        assert_eq!(teardown, Teardown { nodes_released: 4, lists_released: 1 });
    }
}
