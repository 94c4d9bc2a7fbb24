//! Behavioural tests for the knapsack solvers using rstest-bdd.

use std::cell::RefCell;

use knapsack_core::test_support::{assert_consistent, reference_instance, scaled_instance};
use knapsack_core::{Instance, Outcome, SolveResult, SolverLimits, Strategy};
use knapsack_solvers::portfolio;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct SolverWorld {
    instance: RefCell<Option<Instance>>,
    results: RefCell<Vec<SolveResult>>,
}

impl SolverWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn instance(&self) -> Instance {
        self.instance
            .borrow()
            .clone()
            .expect("instance should be given before solving")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn result_for(&self, strategy: Strategy) -> SolveResult {
        self.results
            .borrow()
            .iter()
            .find(|result| result.strategy == strategy)
            .cloned()
            .expect("every strategy should report a result")
    }
}

#[fixture]
fn world() -> SolverWorld {
    SolverWorld::default()
}

#[given("the reference instance")]
fn given_reference(world: &SolverWorld) {
    world.instance.replace(Some(reference_instance()));
}

#[given("an instance with capacity 0")]
fn given_zero_capacity(world: &SolverWorld) {
    let instance = scaled_instance(0, &[(200, 300), (300, 400), (100, 50)]);
    world.instance.replace(Some(instance));
}

#[given("a single item heavier than the capacity")]
fn given_oversize_item(world: &SolverWorld) {
    world
        .instance
        .replace(Some(scaled_instance(3, &[(450, 1_000)])));
}

#[given("an instance with 16 items")]
fn given_sixteen_items(world: &SolverWorld) {
    let pairs: Vec<(u64, u64)> = (1..=16).map(|step| (step * 50, step * 70)).collect();
    world.instance.replace(Some(scaled_instance(20, &pairs)));
}

#[given("an instance with 33 items")]
fn given_thirty_three_items(world: &SolverWorld) {
    let pairs = vec![(100, 150); 33];
    world.instance.replace(Some(scaled_instance(10, &pairs)));
}

#[when("every strategy solves the instance")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_solved(world: &SolverWorld) {
    let instance = world.instance();
    let results = portfolio(&SolverLimits::default())
        .iter()
        .map(|solver| solver.solve(&instance).expect("solve should succeed"))
        .collect();
    world.results.replace(results);
}

#[then("the exact strategies report value 9.00")]
fn then_exact_value(world: &SolverWorld) {
    for result in world.results.borrow().iter() {
        if result.strategy.is_exact() {
            assert_eq!(result.value.raw(), 900, "{}", result.strategy);
        }
    }
}

#[then("the greedy strategy reports value 7.00")]
fn then_greedy_value(world: &SolverWorld) {
    assert_eq!(world.result_for(Strategy::Greedy).value.raw(), 700);
}

#[then("every result fits the capacity")]
fn then_fits(world: &SolverWorld) {
    let instance = world.instance();
    for result in world.results.borrow().iter() {
        assert_consistent(&instance, result);
    }
}

#[then("every strategy reports an empty selection")]
fn then_empty(world: &SolverWorld) {
    for result in world.results.borrow().iter() {
        assert!(result.value.is_zero(), "{}", result.strategy);
        assert!(result.weight.is_zero(), "{}", result.strategy);
        assert_eq!(result.selection.count(), 0, "{}", result.strategy);
    }
}

#[then("exhaustive search is skipped as too large")]
fn then_exhaustive_skipped(world: &SolverWorld) {
    let result = world.result_for(Strategy::Exhaustive);
    assert_eq!(
        result.outcome,
        Outcome::SkippedTooLarge {
            item_count: 16,
            limit: 15,
        }
    );
    assert!(result.value.is_zero());
}

#[then("dynamic programming still finds the optimum")]
fn then_dynamic_optimal(world: &SolverWorld) {
    let dynamic = world.result_for(Strategy::DynamicProgramming);
    let bounded = world.result_for(Strategy::BranchAndBound);
    assert_eq!(dynamic.outcome, Outcome::Optimal);
    assert_eq!(dynamic.value, bounded.value);
}

#[then("branch and bound is skipped as too large")]
fn then_branch_and_bound_skipped(world: &SolverWorld) {
    let result = world.result_for(Strategy::BranchAndBound);
    assert_eq!(
        result.outcome,
        Outcome::SkippedTooLarge {
            item_count: 33,
            limit: 32,
        }
    );
    assert_eq!(result.selection.len(), 33);
}

#[scenario(path = "tests/features/solvers.feature", index = 0)]
fn reference_instance_scenario(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/solvers.feature", index = 1)]
fn zero_capacity(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/solvers.feature", index = 2)]
fn oversize_item(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/solvers.feature", index = 3)]
fn exhaustive_ceiling(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/solvers.feature", index = 4)]
fn branch_and_bound_ceiling(world: SolverWorld) {
    let _ = world;
}
