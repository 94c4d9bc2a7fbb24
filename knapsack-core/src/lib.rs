//! Core domain types for the knapsack engine.
//!
//! Weights and values are fixed-point quantities ([`Scaled`]) so that the
//! solvers compare and accumulate them with exact integer arithmetic.
//! Constructors return `Result` to surface invalid input early; once an
//! [`Instance`] exists, every solver can rely on its items being well formed.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod instance;
pub mod item;
pub mod limits;
pub mod scaled;
pub mod selection;
mod solver;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use instance::{Instance, InstanceError};
pub use item::{Item, ItemError, by_density};
pub use limits::SolverLimits;
pub use scaled::{Scaled, ScaledError};
pub use selection::Selection;
pub use solver::{Diagnostics, Outcome, SolveError, SolveResult, Solver, Strategy};
