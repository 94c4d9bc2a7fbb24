//! Density-ordered greedy heuristic.

use knapsack_core::{
    Diagnostics, Instance, Item, Outcome, Selection, SolveError, SolveResult, Solver, Strategy,
    by_density,
};

/// Heuristic that takes items in descending value density while they fit.
///
/// Items are ranked on a private list of references; the instance keeps its
/// original order. An item that does not fit is passed over and later,
/// lighter items are still considered. The result is feasible but not
/// necessarily optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Construct the heuristic.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Solver for GreedySolver {
    fn strategy(&self) -> Strategy {
        Strategy::Greedy
    }

    fn solve(&self, instance: &Instance) -> Result<SolveResult, SolveError> {
        let mut ranked: Vec<&Item> = instance.items().iter().collect();
        ranked.sort_by(|lhs, rhs| by_density(lhs, rhs));

        let capacity = instance.scaled_capacity();
        let mut selection = Selection::empty(instance.len());
        let mut weight = 0_u64;
        for item in ranked {
            if let Some(candidate) = weight
                .checked_add(item.scaled_weight())
                .filter(|&total| total <= capacity)
            {
                weight = candidate;
                selection.select(item.original_index());
            }
        }
        log::debug!(
            "greedy selected {} of {} items",
            selection.count(),
            instance.len()
        );

        Ok(SolveResult::from_selection(
            self.strategy(),
            Outcome::Approximate,
            instance,
            selection,
            Diagnostics {
                states_explored: u64::try_from(instance.len()).unwrap_or(u64::MAX),
            },
        ))
    }
}
