//! Problem instances.

use thiserror::Error;

use crate::item::{Item, ItemError};
use crate::scaled::{SCALE, Scaled};

/// Errors returned while assembling an [`Instance`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    /// An item's index does not match its position.
    #[error("item at position {position} carries index {found}, expected {expected}")]
    IndexMismatch {
        /// 0-based position in the supplied sequence.
        position: usize,
        /// 1-based index the item should carry.
        expected: usize,
        /// Index the item actually carries.
        found: usize,
    },
    /// An item could not be constructed.
    #[error(transparent)]
    Item(#[from] ItemError),
    /// The summed weights or values overflow once the given item is added.
    #[error("total weight or value overflows at item {index}")]
    TotalOverflow {
        /// 1-based index of the item whose addition overflows.
        index: usize,
    },
}

/// An ordered collection of items together with the knapsack capacity.
///
/// Capacity is a whole number in the same units as item weights. The item at
/// position `i` always carries `original_index == i + 1`, so selections can be
/// reported against the caller's ordering. The total weight and the total value
/// of all items fit in a `u64` of hundredths, so no subset sum can overflow.
///
/// # Examples
///
/// ```
/// use knapsack_core::Instance;
///
/// # fn main() -> Result<(), knapsack_core::InstanceError> {
/// let instance = Instance::from_pairs(7, &[(2.0, 3.0), (3.0, 4.0)])?;
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.scaled_capacity(), 700);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    items: Vec<Item>,
    capacity: u32,
}

impl Instance {
    /// Validate and construct an instance from prepared items.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::IndexMismatch`] when an item's original index
    /// is not its 1-based position, and [`InstanceError::TotalOverflow`] when
    /// the items' weights or values cannot be summed.
    pub fn new(items: Vec<Item>, capacity: u32) -> Result<Self, InstanceError> {
        for (position, item) in items.iter().enumerate() {
            let expected = position + 1;
            if item.original_index() != expected {
                return Err(InstanceError::IndexMismatch {
                    position,
                    expected,
                    found: item.original_index(),
                });
            }
        }
        check_totals(&items)?;
        Ok(Self { items, capacity })
    }

    /// Build an instance from `(weight, value)` pairs, numbering items from 1.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::Item`] when a weight or value is invalid, and
    /// [`InstanceError::TotalOverflow`] when they cannot be summed.
    pub fn from_pairs(capacity: u32, pairs: &[(f64, f64)]) -> Result<Self, InstanceError> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(position, &(weight, value))| Item::new(position + 1, weight, value))
            .collect::<Result<Vec<_>, _>>()?;
        check_totals(&items)?;
        Ok(Self { items, capacity })
    }

    /// Items in their original order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Capacity in whole weight units.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Capacity in hundredths.
    #[must_use]
    pub const fn scaled_capacity(&self) -> u64 {
        // A `u32` multiplied by 100 always fits in a `u64`.
        self.capacity as u64 * SCALE
    }

    /// Whether a total weight fits within the capacity.
    #[must_use]
    pub const fn fits(&self, weight: Scaled) -> bool {
        weight.raw() <= self.scaled_capacity()
    }
}

fn check_totals(items: &[Item]) -> Result<(), InstanceError> {
    let mut weight = Scaled::ZERO;
    let mut value = Scaled::ZERO;
    for item in items {
        let (Some(next_weight), Some(next_value)) = (
            weight.checked_add(item.weight()),
            value.checked_add(item.value()),
        ) else {
            return Err(InstanceError::TotalOverflow {
                index: item.original_index(),
            });
        };
        weight = next_weight;
        value = next_value;
    }
    Ok(())
}
