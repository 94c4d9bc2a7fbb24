//! The solver contract: strategies, outcomes and results.

use std::fmt;

use thiserror::Error;

use crate::{Instance, Scaled, Selection};

/// The algorithm a solver implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Enumerate every subset.
    Exhaustive,
    /// Bottom-up table over items and capacity.
    DynamicProgramming,
    /// Single pass in value-density order.
    Greedy,
    /// Depth-first search pruned by a fractional upper bound.
    BranchAndBound,
}

impl Strategy {
    /// All strategies in reporting order.
    pub const ALL: [Self; 4] = [
        Self::Exhaustive,
        Self::DynamicProgramming,
        Self::Greedy,
        Self::BranchAndBound,
    ];

    /// Stable, machine-friendly label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::DynamicProgramming => "dynamic-programming",
            Self::Greedy => "greedy",
            Self::BranchAndBound => "branch-and-bound",
        }
    }

    /// Whether the strategy guarantees an optimal selection when it runs.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        !matches!(self, Self::Greedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum Outcome {
    /// The selection is provably optimal.
    Optimal,
    /// The selection is feasible but may be sub-optimal.
    Approximate,
    /// The instance has more items than the strategy accepts.
    SkippedTooLarge {
        /// Items in the instance.
        item_count: usize,
        /// Configured ceiling.
        limit: usize,
    },
    /// The projected working memory exceeds the configured ceiling.
    SkippedMemoryLimit {
        /// Projected footprint in bytes, saturated at `u64::MAX`.
        required_bytes: u64,
        /// Configured ceiling in bytes.
        limit_bytes: u64,
    },
}

impl Outcome {
    /// Whether the solver declined to run.
    #[must_use]
    pub const fn is_skipped(self) -> bool {
        matches!(
            self,
            Self::SkippedTooLarge { .. } | Self::SkippedMemoryLimit { .. }
        )
    }

    /// Stable, machine-friendly label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Approximate => "approximate",
            Self::SkippedTooLarge { .. } => "skipped-too-large",
            Self::SkippedMemoryLimit { .. } => "skipped-memory-limit",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkippedTooLarge { item_count, limit } => {
                write!(f, "skipped: {item_count} items exceeds limit of {limit}")
            }
            Self::SkippedMemoryLimit {
                required_bytes,
                limit_bytes,
            } => write!(
                f,
                "skipped: table needs {required_bytes} bytes, limit is {limit_bytes}"
            ),
            Self::Optimal | Self::Approximate => f.write_str(self.label()),
        }
    }
}

/// Work counters reported alongside a solve.
///
/// Counters are deterministic for a given instance and solver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Subsets, table cells, or search nodes visited.
    pub states_explored: u64,
}

/// Result of a single solve.
///
/// # Examples
///
/// ```
/// use knapsack_core::{Outcome, SolveResult, Strategy};
///
/// let skipped = SolveResult::skipped(
///     Strategy::Exhaustive,
///     Outcome::SkippedTooLarge { item_count: 16, limit: 15 },
///     16,
/// );
/// assert!(skipped.outcome.is_skipped());
/// assert!(skipped.value.is_zero());
/// assert_eq!(skipped.selection.count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Strategy that produced the result.
    pub strategy: Strategy,
    /// Classification of the attempt.
    pub outcome: Outcome,
    /// Chosen items in original order.
    pub selection: Selection,
    /// Total value of the chosen items, in hundredths.
    pub value: Scaled,
    /// Total weight of the chosen items, in hundredths.
    pub weight: Scaled,
    /// Work counters.
    pub diagnostics: Diagnostics,
}

impl SolveResult {
    /// Build a result from a selection, computing its totals.
    #[must_use]
    pub fn from_selection(
        strategy: Strategy,
        outcome: Outcome,
        instance: &Instance,
        selection: Selection,
        diagnostics: Diagnostics,
    ) -> Self {
        let (value, weight) = selection.totals(instance);
        Self {
            strategy,
            outcome,
            selection,
            value,
            weight,
            diagnostics,
        }
    }

    /// A result for a solve that did no work.
    #[must_use]
    pub fn skipped(strategy: Strategy, outcome: Outcome, item_count: usize) -> Self {
        Self {
            strategy,
            outcome,
            selection: Selection::empty(item_count),
            value: Scaled::ZERO,
            weight: Scaled::ZERO,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Total value as a real number.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.to_f64()
    }

    /// Total weight as a real number.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight.to_f64()
    }
}

/// Errors returned by [`Solver::solve`].
///
/// Size guards are not errors; they surface as skipped [`Outcome`]s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Working memory could not be allocated despite passing the size guard.
    #[error("failed to allocate {bytes} bytes of working memory")]
    Allocation {
        /// Requested allocation size in bytes.
        bytes: u64,
    },
}

/// Choose a subset of an instance's items.
///
/// Implementations never modify the instance and keep no state between calls,
/// so solving the same instance twice yields the same result.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// The algorithm this solver implements.
    fn strategy(&self) -> Strategy;

    /// Solve an instance, producing a result or an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] when working memory cannot be obtained.
    fn solve(&self, instance: &Instance) -> Result<SolveResult, SolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::Optimal, false)]
    #[case(Outcome::Approximate, false)]
    #[case(Outcome::SkippedTooLarge { item_count: 16, limit: 15 }, true)]
    #[case(Outcome::SkippedMemoryLimit { required_bytes: 10, limit_bytes: 5 }, true)]
    fn outcome_reports_skips(#[case] outcome: Outcome, #[case] skipped: bool) {
        assert_eq!(outcome.is_skipped(), skipped);
    }

    #[rstest]
    fn only_greedy_is_inexact() {
        let inexact: Vec<Strategy> = Strategy::ALL
            .into_iter()
            .filter(|strategy| !strategy.is_exact())
            .collect();
        assert_eq!(inexact, vec![Strategy::Greedy]);
    }

    #[rstest]
    fn from_selection_computes_totals() {
        let instance =
            Instance::from_pairs(7, &[(2.0, 3.0), (3.0, 4.0)]).expect("valid instance");
        let result = SolveResult::from_selection(
            Strategy::Greedy,
            Outcome::Approximate,
            &instance,
            Selection::from_flags(vec![true, true]),
            Diagnostics::default(),
        );
        assert_eq!(result.value, Scaled::from_raw(700));
        assert_eq!(result.weight, Scaled::from_raw(500));
        assert!((result.weight() - 5.0).abs() < f64::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn outcome_serialises_with_kind_tag() {
        let json = serde_json::to_value(Outcome::SkippedTooLarge {
            item_count: 16,
            limit: 15,
        })
        .expect("serialise outcome");
        assert_eq!(json["kind"], "skipped-too-large");
        assert_eq!(json["item_count"], 16);
    }
}
