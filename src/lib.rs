//! Facade crate for the knapsack engine.
//!
//! This crate re-exports the core domain types and, behind the `solvers`
//! feature, the four solving strategies.

#![forbid(unsafe_code)]

pub use knapsack_core::{
    Diagnostics, Instance, InstanceError, Item, ItemError, Outcome, Scaled, ScaledError,
    Selection, SolveError, SolveResult, Solver, SolverLimits, Strategy, by_density,
};

#[cfg(feature = "test-support")]
pub use knapsack_core::test_support;

#[cfg(feature = "solvers")]
pub use knapsack_solvers::{
    BranchAndBoundSolver, DynamicProgrammingSolver, ExhaustiveSolver, GreedySolver, portfolio,
    solver_for,
};
