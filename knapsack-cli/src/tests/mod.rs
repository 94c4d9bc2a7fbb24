//! Shared test harness modules for the knapsack CLI.

use super::*;

mod helpers;
