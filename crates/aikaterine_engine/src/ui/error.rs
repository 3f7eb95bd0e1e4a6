//! UI construction errors

use thiserror::Error;

/// A UI tree description that cannot be built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Parallel child and weight lists of different lengths
    #[error("Group has {children} children but {weights} weights")]
    MismatchedWeights {
        /// Number of children supplied
        children: usize,
        /// Number of weights supplied
        weights: usize,
    },

    /// A scaled wrapper without the element it scales
    #[error("Scaled element has no child")]
    MissingChild,

    /// Size hint that cannot act as a relative weight
    #[error("Weight {weight} of child {index} must be finite and non-negative")]
    InvalidWeight {
        /// Position of the child in its group
        index: usize,
        /// Offending weight
        weight: f32,
    },

    /// Scale factor that is NaN or infinite
    #[error("Scale factor ({x}, {y}) must be finite")]
    InvalidScale {
        /// Horizontal factor
        x: f32,
        /// Vertical factor
        y: f32,
    },
}
