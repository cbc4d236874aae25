//! Numeric bound shared by every weighted algorithm.
use num_traits::Zero;
use std::fmt;

/// Edge weight and path length type.
///
/// Any copyable, partially ordered number with an additive identity qualifies: all primitive
/// integers and floats do. Sums are computed with plain `+`, so integer overflow follows the
/// usual debug/release rules of the chosen type.
///
/// Floats must not be NaN; comparisons involving NaN are all false and a NaN weight is never
/// considered an improvement.
pub trait Weight: Copy + PartialOrd + Zero + fmt::Debug {
    /// Returns true if this weight is strictly below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl<T: Copy + PartialOrd + Zero + fmt::Debug> Weight for T {}
