//! Items offered to the knapsack.

use std::cmp::Ordering;

use thiserror::Error;

use crate::scaled::{Scaled, ScaledError};

/// Errors returned by [`Item::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ItemError {
    /// Item indices are 1-based.
    #[error("item index must be at least 1")]
    ZeroIndex,
    /// The weight could not be represented as a fixed-point quantity.
    #[error("invalid weight for item {index}: {source}")]
    Weight {
        /// 1-based item index.
        index: usize,
        /// Underlying conversion failure.
        #[source]
        source: ScaledError,
    },
    /// The value could not be represented as a fixed-point quantity.
    #[error("invalid value for item {index}: {source}")]
    Value {
        /// 1-based item index.
        index: usize,
        /// Underlying conversion failure.
        #[source]
        source: ScaledError,
    },
}

/// A single candidate item.
///
/// Items never change after construction. The value density is computed once
/// from the unscaled weight and value and is used only to order items.
///
/// # Examples
///
/// ```
/// use knapsack_core::Item;
///
/// # fn main() -> Result<(), knapsack_core::ItemError> {
/// let item = Item::new(1, 2.0, 3.0)?;
/// assert_eq!(item.scaled_weight(), 200);
/// assert!((item.density() - 1.5).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    original_index: usize,
    weight: Scaled,
    value: Scaled,
    density: f64,
}

impl Item {
    /// Validate and construct an item from real weight and value.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] when the index is zero or either quantity is not
    /// a non-negative number with at most two decimal digits.
    pub fn new(original_index: usize, weight: f64, value: f64) -> Result<Self, ItemError> {
        if original_index == 0 {
            return Err(ItemError::ZeroIndex);
        }
        let weight = Scaled::from_f64(weight).map_err(|source| ItemError::Weight {
            index: original_index,
            source,
        })?;
        let value = Scaled::from_f64(value).map_err(|source| ItemError::Value {
            index: original_index,
            source,
        })?;
        Ok(Self::from_scaled(original_index, weight, value))
    }

    /// Construct an item from quantities already in fixed-point form.
    ///
    /// An `original_index` of zero is accepted here; [`crate::Instance::new`]
    /// rejects it when the item is placed in an instance.
    #[must_use]
    pub fn from_scaled(original_index: usize, weight: Scaled, value: Scaled) -> Self {
        Self {
            original_index,
            weight,
            value,
            density: density(weight, value),
        }
    }

    /// 1-based position of the item in the caller's ordering.
    #[must_use]
    pub const fn original_index(&self) -> usize {
        self.original_index
    }

    /// Fixed-point weight.
    #[must_use]
    pub const fn weight(&self) -> Scaled {
        self.weight
    }

    /// Fixed-point value.
    #[must_use]
    pub const fn value(&self) -> Scaled {
        self.value
    }

    /// Weight in hundredths, used to index dynamic-programming tables.
    #[must_use]
    pub const fn scaled_weight(&self) -> u64 {
        self.weight.raw()
    }

    /// Value in hundredths.
    #[must_use]
    pub const fn scaled_value(&self) -> u64 {
        self.value.raw()
    }

    /// Value per unit weight.
    ///
    /// Weightless items with a positive value report [`f64::INFINITY`];
    /// weightless items without value report `0.0`.
    #[must_use]
    pub const fn density(&self) -> f64 {
        self.density
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "value density is a real-valued ordering key"
)]
fn density(weight: Scaled, value: Scaled) -> f64 {
    if weight.is_zero() {
        if value.is_zero() { 0.0 } else { f64::INFINITY }
    } else {
        value.to_f64() / weight.to_f64()
    }
}

/// Order items by descending density, lighter items first on ties.
///
/// Ratio-based strategies sort with this comparator. Items that compare equal
/// keep their relative order when used with a stable sort.
#[must_use]
pub fn by_density(lhs: &Item, rhs: &Item) -> Ordering {
    rhs.density
        .total_cmp(&lhs.density)
        .then_with(|| lhs.weight.cmp(&rhs.weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn stores_fixed_point_quantities() {
        let item = Item::new(3, 4.25, 5.5).expect("valid item");
        assert_eq!(item.original_index(), 3);
        assert_eq!(item.scaled_weight(), 425);
        assert_eq!(item.scaled_value(), 550);
    }

    #[rstest]
    #[case(2.0, 3.0, 1.5)]
    #[case(5.0, 6.0, 1.2)]
    #[case(4.0, 0.0, 0.0)]
    fn density_divides_value_by_weight(
        #[case] weight: f64,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        let item = Item::new(1, weight, value).expect("valid item");
        assert!((item.density() - expected).abs() < 1e-12);
    }

    #[rstest]
    fn weightless_valuable_item_has_infinite_density() {
        let item = Item::new(1, 0.0, 2.5).expect("valid item");
        assert!(item.density().is_infinite());
    }

    #[rstest]
    fn weightless_worthless_item_has_zero_density() {
        let item = Item::new(1, 0.0, 0.0).expect("valid item");
        assert!(item.density().abs() < f64::EPSILON);
    }

    #[rstest]
    fn rejects_zero_index() {
        assert_eq!(Item::new(0, 1.0, 1.0), Err(ItemError::ZeroIndex));
    }

    #[rstest]
    fn reports_offending_quantity() {
        let err = Item::new(2, 1.0, -3.0).expect_err("negative value");
        assert!(matches!(err, ItemError::Value { index: 2, .. }));
        let err = Item::new(4, 1.001, 3.0).expect_err("three decimals");
        assert!(matches!(err, ItemError::Weight { index: 4, .. }));
    }

    #[rstest]
    fn density_order_prefers_ratio_then_lightness() {
        let mut items = vec![
            Item::new(1, 4.0, 4.0).expect("valid item"),
            Item::new(2, 2.0, 2.0).expect("valid item"),
            Item::new(3, 1.0, 3.0).expect("valid item"),
            Item::new(4, 0.0, 0.0).expect("valid item"),
            Item::new(5, 0.0, 1.0).expect("valid item"),
        ];
        items.sort_by(by_density);
        let order: Vec<usize> = items.iter().map(Item::original_index).collect();
        assert_eq!(order, vec![5, 3, 2, 1, 4]);
    }
}
