//! Property-based tests for the knapsack solvers.
//!
//! # Invariants tested
//!
//! - **Agreement:** exhaustive, dynamic programming and branch and bound
//!   report the same optimal value.
//! - **Feasibility:** every result fits the capacity and its totals match
//!   its selection.
//! - **Heuristic bound:** greedy never beats the optimum.
//! - **Idempotence:** solving twice yields identical results.
//! - **Isolation:** solving leaves the instance unchanged.
//! - **Mid-sized agreement:** branch and bound matches dynamic programming
//!   above the default exhaustive ceiling.
//! - **Decimal input:** two-decimal `f64` pairs scale exactly and solve like
//!   their integer counterparts.


use knapsack_core::test_support::consistency_violation;
use knapsack_core::test_support::scaled_instance;
use knapsack_core::{Instance, Outcome, Solver, SolverLimits, Strategy};
use knapsack_solvers::{
    BranchAndBoundSolver, DynamicProgrammingSolver, GreedySolver, portfolio, solver_for,
};
use proptest::prelude::*;

use proptest_support::{decimal_pairs_strategy, instance_strategy, mid_size_instance_strategy};

/// Exhaustive search is allowed a little past its default ceiling so it
/// cross-checks the smallest mid-sized instances too.
fn mid_size_limits() -> SolverLimits {
    SolverLimits {
        exhaustive_max_items: 18,
        ..SolverLimits::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the exact strategies agree on the optimal value.
    #[test]
    fn exact_strategies_agree(instance in instance_strategy()) {
        let mut optimum = None;
        for solver in portfolio(&SolverLimits::default()) {
            if !solver.strategy().is_exact() {
                continue;
            }
            let result = solver.solve(&instance).expect("solve should succeed");
            prop_assert_eq!(result.outcome, Outcome::Optimal);
            let expected = *optimum.get_or_insert(result.value);
            prop_assert_eq!(
                result.value,
                expected,
                "{} disagrees on the optimum",
                result.strategy
            );
        }
    }

    /// Property: every strategy returns a feasible, self-consistent result.
    #[test]
    fn results_are_consistent(instance in instance_strategy()) {
        for solver in portfolio(&SolverLimits::default()) {
            let result = solver.solve(&instance).expect("solve should succeed");
            if let Some(violation) = consistency_violation(&instance, &result) {
                return Err(TestCaseError::fail(violation));
            }
        }
    }

    /// Property: the greedy heuristic never exceeds the optimum.
    #[test]
    fn greedy_never_beats_the_optimum(instance in instance_strategy()) {
        let greedy = GreedySolver::new().solve(&instance).expect("solve should succeed");
        let optimal = DynamicProgrammingSolver::new()
            .solve(&instance)
            .expect("solve should succeed");
        prop_assert_eq!(greedy.outcome, Outcome::Approximate);
        prop_assert!(greedy.value <= optimal.value);
    }

    /// Property: solving is idempotent and leaves the instance untouched.
    #[test]
    fn solving_is_idempotent(instance in instance_strategy()) {
        let before = instance.clone();
        for strategy in Strategy::ALL {
            let solver = solver_for(strategy, &SolverLimits::default());
            let first = solver.solve(&instance).expect("solve should succeed");
            let second = solver.solve(&instance).expect("solve should succeed");
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(instance, before);
    }

    /// Property: above the default exhaustive ceiling, branch and bound still
    /// reaches the dynamic-programming optimum.
    #[test]
    fn branch_and_bound_matches_dp_on_mid_sized_instances(
        instance in mid_size_instance_strategy()
    ) {
        let limits = mid_size_limits();
        let optimal = DynamicProgrammingSolver::with_limits(&limits)
            .solve(&instance)
            .expect("solve should succeed");
        let searched = BranchAndBoundSolver::with_limits(&limits)
            .solve(&instance)
            .expect("solve should succeed");
        prop_assert_eq!(optimal.outcome, Outcome::Optimal);
        prop_assert_eq!(searched.outcome, Outcome::Optimal);
        prop_assert_eq!(searched.value, optimal.value);
        if let Some(violation) = consistency_violation(&instance, &searched) {
            return Err(TestCaseError::fail(violation));
        }
        for solver in portfolio(&limits) {
            let result = solver.solve(&instance).expect("solve should succeed");
            if result.strategy.is_exact() && !result.outcome.is_skipped() {
                prop_assert_eq!(result.value, optimal.value);
            }
        }
    }

    /// Property: two-decimal `f64` input scales exactly and every strategy
    /// returns the same result as for the equivalent scaled instance.
    #[test]
    fn decimal_input_solves_like_scaled_input(
        (capacity, pairs) in decimal_pairs_strategy()
    ) {
        let floats: Vec<(f64, f64)> = pairs
            .iter()
            .map(|(weight, value)| (weight.to_f64(), value.to_f64()))
            .collect();
        let scaled: Vec<(u64, u64)> = pairs
            .iter()
            .map(|(weight, value)| (weight.hundredths(), value.hundredths()))
            .collect();
        let from_floats = Instance::from_pairs(capacity, &floats)
            .expect("two-decimal pairs are valid");
        let expected = scaled_instance(capacity, &scaled);
        prop_assert_eq!(&from_floats, &expected);
        for strategy in Strategy::ALL {
            let solver = solver_for(strategy, &SolverLimits::default());
            let result = solver.solve(&from_floats).expect("solve should succeed");
            if let Some(violation) = consistency_violation(&from_floats, &result) {
                return Err(TestCaseError::fail(violation));
            }
            prop_assert_eq!(result, solver.solve(&expected).expect("solve should succeed"));
        }
    }
}
