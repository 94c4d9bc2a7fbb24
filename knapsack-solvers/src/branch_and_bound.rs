//! Depth-first branch and bound with a fractional-relaxation bound.

use knapsack_core::{
    Diagnostics, Instance, Item, Outcome, Selection, SolveError, SolveResult, Solver,
    SolverLimits, Strategy, by_density,
};

/// Exact solver that searches include/exclude decisions in density order.
///
/// The search runs on an explicit stack, so its depth is bounded by the item
/// count rather than the call stack. At every node the exclude branch is
/// explored before the include branch, and the include branch is only
/// generated when the item fits. Subtrees whose bound does not exceed the
/// incumbent are pruned.
#[derive(Debug, Clone)]
pub struct BranchAndBoundSolver {
    max_items: usize,
}

impl Default for BranchAndBoundSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchAndBoundSolver {
    /// Construct a solver using the default item-count ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(&SolverLimits::default())
    }

    /// Construct a solver using the branch-and-bound ceiling from `limits`.
    #[must_use]
    pub const fn with_limits(limits: &SolverLimits) -> Self {
        Self {
            max_items: limits.branch_and_bound_max_items,
        }
    }
}

/// A pending node of the search tree.
///
/// Items `0..depth` of the ranked order have been decided; `decision` records
/// the choice for item `depth - 1` and is `None` at the root.
#[derive(Debug, Clone, Copy)]
struct Frame {
    depth: usize,
    weight: u64,
    value: u64,
    decision: Option<bool>,
}

impl Frame {
    const fn root() -> Self {
        Self {
            depth: 0,
            weight: 0,
            value: 0,
            decision: None,
        }
    }

    const fn exclude(self) -> Self {
        Self {
            depth: self.depth + 1,
            decision: Some(false),
            ..self
        }
    }

    const fn include(self, item: &Item) -> Self {
        Self {
            depth: self.depth + 1,
            weight: self.weight.saturating_add(item.scaled_weight()),
            value: self.value.saturating_add(item.scaled_value()),
            decision: Some(true),
        }
    }
}

/// Incumbent and path bookkeeping for one search.
struct Search<'a> {
    ranked: Vec<&'a Item>,
    capacity: u64,
    path: Vec<bool>,
    best_path: Vec<bool>,
    best_value: u64,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(instance: &'a Instance) -> Self {
        let mut ranked: Vec<&Item> = instance.items().iter().collect();
        ranked.sort_by(|lhs, rhs| by_density(lhs, rhs));
        let len = ranked.len();
        Self {
            ranked,
            capacity: instance.scaled_capacity(),
            path: vec![false; len],
            best_path: vec![false; len],
            best_value: 0,
            nodes: 0,
        }
    }

    fn run(&mut self) {
        let mut stack = Vec::with_capacity(self.ranked.len().saturating_mul(2) + 1);
        stack.push(Frame::root());
        while let Some(frame) = stack.pop() {
            self.nodes += 1;
            if let (Some(taken), Some(slot)) = (
                frame.decision,
                frame
                    .depth
                    .checked_sub(1)
                    .and_then(|decided| self.path.get_mut(decided)),
            ) {
                *slot = taken;
            }

            let Some(&item) = self.ranked.get(frame.depth) else {
                if frame.value > self.best_value {
                    self.best_value = frame.value;
                    self.best_path.clone_from(&self.path);
                }
                continue;
            };
            if self.upper_bound(frame) <= self.best_value {
                continue;
            }

            // Pushed first so the exclude branch is popped first.
            if frame
                .weight
                .checked_add(item.scaled_weight())
                .is_some_and(|total| total <= self.capacity)
            {
                stack.push(frame.include(item));
            }
            stack.push(frame.exclude());
        }
    }

    /// Greedy fractional relaxation of the undecided items, rounded up.
    ///
    /// Whole items are taken in density order while they fit; the first item
    /// that does not fit contributes `ceil(value * remaining / weight)`.
    fn upper_bound(&self, frame: Frame) -> u64 {
        let mut remaining = self.capacity.saturating_sub(frame.weight);
        let mut bound = frame.value;
        for item in self.ranked.iter().skip(frame.depth) {
            let weight = item.scaled_weight();
            if weight <= remaining {
                remaining -= weight;
                bound = bound.saturating_add(item.scaled_value());
            } else {
                let fraction = (u128::from(item.scaled_value()) * u128::from(remaining))
                    .div_ceil(u128::from(weight));
                bound = bound.saturating_add(u64::try_from(fraction).unwrap_or(u64::MAX));
                break;
            }
        }
        bound
    }

    fn selection(&self) -> Selection {
        let mut selection = Selection::empty(self.ranked.len());
        for (item, &taken) in self.ranked.iter().zip(&self.best_path) {
            if taken {
                selection.select(item.original_index());
            }
        }
        selection
    }
}

impl Solver for BranchAndBoundSolver {
    fn strategy(&self) -> Strategy {
        Strategy::BranchAndBound
    }

    fn solve(&self, instance: &Instance) -> Result<SolveResult, SolveError> {
        let item_count = instance.len();
        if item_count > self.max_items {
            log::info!(
                "branch and bound skipped: {item_count} items exceeds limit of {}",
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
        }

        let mut search = Search::new(instance);
        search.run();
        log::debug!(
            "branch and bound visited {} nodes, best value {}",
            search.nodes,
            search.best_value
        );

        Ok(SolveResult::from_selection(
            self.strategy(),
            Outcome::Optimal,
            instance,
            search.selection(),
            Diagnostics {
                states_explored: search.nodes,
            },
        ))
    }
}
