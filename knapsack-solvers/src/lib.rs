//! The four knapsack strategies.
//!
//! Each strategy implements the [`Solver`](knapsack_core::Solver) trait:
//!
//! - [`ExhaustiveSolver`] enumerates every subset.
//! - [`DynamicProgrammingSolver`] fills a table over items and scaled
//!   capacity.
//! - [`GreedySolver`] takes items in descending value density.
//! - [`BranchAndBoundSolver`] searches include/exclude decisions and prunes
//!   with a fractional-relaxation bound.
//!
//! The exact strategies guard themselves with the ceilings in
//! [`SolverLimits`]; oversized instances come back as skipped results rather
//! than errors. [`portfolio`] builds all four for side-by-side comparison.
//!
//! # Examples
//!
//! ```
//! use knapsack_core::{Instance, SolverLimits};
//! use knapsack_solvers::portfolio;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let instance = Instance::from_pairs(7, &[(2.0, 3.0), (3.0, 4.0), (4.0, 5.0), (5.0, 6.0)])?;
//! for solver in portfolio(&SolverLimits::default()) {
//!     let result = solver.solve(&instance)?;
//!     assert!(result.weight() <= 7.0);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod branch_and_bound;
mod dynamic;
mod exhaustive;
mod greedy;

pub use branch_and_bound::BranchAndBoundSolver;
pub use dynamic::DynamicProgrammingSolver;
pub use exhaustive::ExhaustiveSolver;
pub use greedy::GreedySolver;

use knapsack_core::{Solver, SolverLimits, Strategy};

/// Build the solver for `strategy` with the ceilings from `limits`.
#[must_use]
pub fn solver_for(strategy: Strategy, limits: &SolverLimits) -> Box<dyn Solver> {
    match strategy {
        Strategy::Exhaustive => Box::new(ExhaustiveSolver::with_limits(limits)),
        Strategy::DynamicProgramming => Box::new(DynamicProgrammingSolver::with_limits(limits)),
        Strategy::Greedy => Box::new(GreedySolver::new()),
        Strategy::BranchAndBound => Box::new(BranchAndBoundSolver::with_limits(limits)),
    }
}

/// All four solvers in reporting order: exhaustive, dynamic programming,
/// greedy, then branch and bound.
#[must_use]
pub fn portfolio(limits: &SolverLimits) -> Vec<Box<dyn Solver>> {
    Strategy::ALL
        .iter()
        .map(|&strategy| solver_for(strategy, limits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn portfolio_follows_reporting_order() {
        let strategies: Vec<Strategy> = portfolio(&SolverLimits::default())
            .iter()
            .map(|solver| solver.strategy())
            .collect();
        assert_eq!(strategies, Strategy::ALL.to_vec());
    }

    #[rstest]
    #[case(Strategy::Exhaustive)]
    #[case(Strategy::DynamicProgramming)]
    #[case(Strategy::Greedy)]
    #[case(Strategy::BranchAndBound)]
    fn solver_for_builds_requested_strategy(#[case] strategy: Strategy) {
        assert_eq!(
            solver_for(strategy, &SolverLimits::default()).strategy(),
            strategy
        );
    }
}
