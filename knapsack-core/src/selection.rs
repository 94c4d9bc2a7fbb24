//! Per-item selection flags.

use crate::instance::Instance;
use crate::scaled::Scaled;

/// Which items a solver chose, aligned with the instance's original ordering.
///
/// # Examples
///
/// ```
/// use knapsack_core::Selection;
///
/// let mut selection = Selection::empty(3);
/// selection.select(2);
/// selection.select(4);
/// assert_eq!(selection.chosen().collect::<Vec<_>>(), vec![2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    flags: Vec<bool>,
}

impl Selection {
    /// A selection of `len` items with nothing chosen.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Wrap existing flags.
    #[must_use]
    pub const fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Mark the item with the given 1-based index as chosen.
    ///
    /// Indices outside the selection are ignored.
    pub fn select(&mut self, original_index: usize) {
        if let Some(flag) = original_index
            .checked_sub(1)
            .and_then(|position| self.flags.get_mut(position))
        {
            *flag = true;
        }
    }

    /// Raw flags in original order.
    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Number of items covered by the selection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the selection covers no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of chosen items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    /// 1-based indices of the chosen items, in ascending order.
    pub fn chosen(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag)
            .map(|(position, _)| position + 1)
    }

    /// Total value and total weight of the chosen items.
    ///
    /// Totals cannot overflow for a selection over a validated [`Instance`].
    #[must_use]
    pub fn totals(&self, instance: &Instance) -> (Scaled, Scaled) {
        instance
            .items()
            .iter()
            .zip(&self.flags)
            .filter(|(_, flag)| **flag)
            .fold((Scaled::ZERO, Scaled::ZERO), |(value, weight), (item, _)| {
                (
                    value.saturating_add(item.value()),
                    weight.saturating_add(item.weight()),
                )
            })
    }
}
