//! Shared fixtures and assertions for solver tests.
//!
//! Available to downstream crates through the `test-support` feature.

use crate::{Instance, Item, Scaled, SolveResult};

/// The four-item instance used throughout the test suites.
///
/// Items `(2, 3)`, `(3, 4)`, `(4, 5)` and `(5, 6)` with capacity 7. The
/// optimum is 9.00, reached by items 2 and 3 or by items 1 and 4. Taking
/// items in density order stops at items 1 and 2, worth 7.00.
#[must_use]
pub fn reference_instance() -> Instance {
    scaled_instance(7, &[(200, 300), (300, 400), (400, 500), (500, 600)])
}

/// Optimal value of [`reference_instance`], in hundredths.
pub const REFERENCE_OPTIMUM: u64 = 900;

/// Value the density-order heuristic reaches on [`reference_instance`].
pub const REFERENCE_GREEDY_VALUE: u64 = 700;

/// Three items whose weights sum to exactly `u64::MAX` hundredths.
///
/// Item 1 can never fit. Items 2 and 3 fit together for a value of 5.00,
/// which is the optimum and also what the density order reaches.
#[must_use]
pub fn saturated_weight_instance() -> Instance {
    scaled_instance(10, &[(u64::MAX - 500, 100), (300, 400), (200, 100)])
}

/// Build an instance from `(weight, value)` pairs already in hundredths.
#[must_use]
pub fn scaled_instance(capacity: u32, pairs: &[(u64, u64)]) -> Instance {
    let items = pairs
        .iter()
        .enumerate()
        .map(|(position, &(weight, value))| {
            Item::from_scaled(position + 1, Scaled::from_raw(weight), Scaled::from_raw(value))
        })
        .collect();
    match Instance::new(items, capacity) {
        Ok(instance) => instance,
        Err(err) => panic!("scaled_instance pairs must have summable totals: {err}"),
    }
}

/// Describe the first way a result is inconsistent with its instance.
///
/// Checks that the selection covers every item, that the reported totals
/// match the flagged items, and that the weight fits the capacity. Returns
/// `None` when the result is consistent.
#[must_use]
pub fn consistency_violation(instance: &Instance, result: &SolveResult) -> Option<String> {
    if result.selection.len() != instance.len() {
        return Some(format!(
            "{} selection covers {} items, instance has {}",
            result.strategy,
            result.selection.len(),
            instance.len()
        ));
    }
    let (value, weight) = result.selection.totals(instance);
    if value != result.value {
        return Some(format!(
            "{} reports value {} but selection sums to {value}",
            result.strategy, result.value
        ));
    }
    if weight != result.weight {
        return Some(format!(
            "{} reports weight {} but selection sums to {weight}",
            result.strategy, result.weight
        ));
    }
    if !instance.fits(result.weight) {
        return Some(format!(
            "{} weight {} exceeds capacity {}",
            result.strategy,
            result.weight,
            instance.capacity()
        ));
    }
    None
}

/// Panic unless `result` is consistent with `instance`.
///
/// # Panics
///
/// Panics with the violation described by [`consistency_violation`].
pub fn assert_consistent(instance: &Instance, result: &SolveResult) {
    if let Some(violation) = consistency_violation(instance, result) {
        panic!("{violation}");
    }
}
