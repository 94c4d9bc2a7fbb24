//! Brute-force enumeration of every subset.

use knapsack_core::{
    Diagnostics, Instance, Outcome, Selection, SolveError, SolveResult, Solver, SolverLimits,
    Strategy,
};

/// Exact solver that tries all `2^n` subsets.
///
/// Subsets are visited in bit-mask order, bit `j` standing for item `j + 1`.
/// A later subset replaces the incumbent only when its value is strictly
/// greater, so the first optimal subset found is the one reported.
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver {
    max_items: usize,
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExhaustiveSolver {
    /// Construct a solver using the default item-count ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(&SolverLimits::default())
    }

    /// Construct a solver using the exhaustive ceiling from `limits`.
    #[must_use]
    pub const fn with_limits(limits: &SolverLimits) -> Self {
        Self {
            max_items: limits.exhaustive_max_items,
        }
    }
}

impl Solver for ExhaustiveSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Exhaustive
    }

    fn solve(&self, instance: &Instance) -> Result<SolveResult, SolveError> {
        let item_count = instance.len();
        let subsets = u32::try_from(item_count)
            .ok()
            .and_then(|bits| 1_u64.checked_shl(bits));
        let Some(subsets) = subsets.filter(|_| item_count <= self.max_items) else {
            log::info!(
                "exhaustive search skipped: {item_count} items exceeds limit of {}",
                self.max_items
            );
            return Ok(SolveResult::skipped(
                self.strategy(),
                Outcome::SkippedTooLarge {
                    item_count,
                    limit: self.max_items,
                },
                item_count,
            ));
        };

        let capacity = instance.scaled_capacity();
        let mut best_mask = 0_u64;
        let mut best_value = 0_u64;
        for mask in 0..subsets {
            let Some((weight, value)) = subset_totals(instance, mask) else {
                continue;
            };
            if weight <= capacity && value > best_value {
                best_value = value;
                best_mask = mask;
            }
        }
        log::debug!("exhaustive search visited {subsets} subsets, best value {best_value}");

        let selection = Selection::from_flags(
            (0..item_count)
                .map(|bit| (best_mask >> bit) & 1 == 1)
                .collect(),
        );
        Ok(SolveResult::from_selection(
            self.strategy(),
            Outcome::Optimal,
            instance,
            selection,
            Diagnostics {
                states_explored: subsets,
            },
        ))
    }
}

/// Scaled weight and value of the items whose bits are set in `mask`, or
/// `None` when either sum overflows.
fn subset_totals(instance: &Instance, mask: u64) -> Option<(u64, u64)> {
    instance
        .items()
        .iter()
        .enumerate()
        .filter(|(bit, _)| (mask >> bit) & 1 == 1)
        .try_fold((0_u64, 0_u64), |(weight, value), (_, item)| {
            Some((
                weight.checked_add(item.scaled_weight())?,
                value.checked_add(item.scaled_value())?,
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapsack_core::test_support::{
        REFERENCE_OPTIMUM, reference_instance, saturated_weight_instance, scaled_instance,
    };
    use rstest::rstest;

    #[rstest]
    fn finds_reference_optimum() {
        let result = ExhaustiveSolver::new()
            .solve(&reference_instance())
            .expect("solve succeeds");
        assert_eq!(result.outcome, Outcome::Optimal);
        assert_eq!(result.value.raw(), REFERENCE_OPTIMUM);
        assert_eq!(result.diagnostics.states_explored, 16);
        // Mask 0b0110 (items 2 and 3) precedes mask 0b1001 (items 1 and 4).
        assert_eq!(result.selection.chosen().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn first_optimal_subset_wins_ties() {
        // Items 1 and 2 each reach the optimum alone; mask 0b01 is visited first.
        let instance = scaled_instance(1, &[(100, 500), (100, 500)]);
        let result = ExhaustiveSolver::new()
            .solve(&instance)
            .expect("solve succeeds");
        assert_eq!(result.selection.chosen().collect::<Vec<_>>(), vec![1]);
    }

    #[rstest]
    fn skips_instances_above_the_ceiling() {
        let pairs = vec![(100, 100); 16];
        let instance = scaled_instance(100, &pairs);
        let result = ExhaustiveSolver::new()
            .solve(&instance)
            .expect("solve succeeds");
        assert_eq!(
            result.outcome,
            Outcome::SkippedTooLarge {
                item_count: 16,
                limit: 15,
            }
        );
        assert!(result.value.is_zero());
        assert_eq!(result.selection.len(), 16);
        assert_eq!(result.diagnostics.states_explored, 0);
    }

    #[rstest]
    fn skips_when_subset_count_overflows() {
        let limits = SolverLimits {
            exhaustive_max_items: usize::MAX,
            ..SolverLimits::default()
        };
        let pairs = vec![(100, 100); 64];
        let instance = scaled_instance(100, &pairs);
        let result = ExhaustiveSolver::with_limits(&limits)
            .solve(&instance)
            .expect("solve succeeds");
        assert!(result.outcome.is_skipped());
    }

    #[rstest]
    fn empty_instance_selects_nothing() {
        let instance = scaled_instance(10, &[]);
        let result = ExhaustiveSolver::new()
            .solve(&instance)
            .expect("solve succeeds");
        assert!(result.value.is_zero());
        assert_eq!(result.diagnostics.states_explored, 1);
    }

    #[rstest]
    fn ignores_an_item_weighing_nearly_the_whole_range() {
        let instance = saturated_weight_instance();
        let result = ExhaustiveSolver::new()
            .solve(&instance)
            .expect("solve succeeds");
        assert_eq!(result.value.raw(), 500);
        assert_eq!(result.weight.raw(), 500);
        assert_eq!(result.selection.chosen().collect::<Vec<_>>(), vec![2, 3]);
    }
}
