//! Size guards shared by the solvers.

/// Default item-count ceiling for exhaustive enumeration.
pub const DEFAULT_EXHAUSTIVE_MAX_ITEMS: usize = 15;

/// Default item-count ceiling for branch-and-bound search.
pub const DEFAULT_BRANCH_AND_BOUND_MAX_ITEMS: usize = 32;

/// Default ceiling on the dynamic-programming table footprint (2 GiB).
pub const DEFAULT_DP_MAX_TABLE_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// Ceilings that stop expensive strategies before they start.
///
/// Solvers check these before doing any work and report a skipped outcome
/// instead of running past them.
///
/// # Examples
///
/// ```
/// use knapsack_core::SolverLimits;
///
/// let limits = SolverLimits::default();
/// assert_eq!(limits.exhaustive_max_items, 15);
/// assert_eq!(limits.branch_and_bound_max_items, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverLimits {
    /// Largest instance the exhaustive solver will enumerate.
    pub exhaustive_max_items: usize,
    /// Largest instance the branch-and-bound solver will search.
    pub branch_and_bound_max_items: usize,
    /// Largest dynamic-programming table, in bytes.
    pub dp_max_table_bytes: u64,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            exhaustive_max_items: DEFAULT_EXHAUSTIVE_MAX_ITEMS,
            branch_and_bound_max_items: DEFAULT_BRANCH_AND_BOUND_MAX_ITEMS,
            dp_max_table_bytes: DEFAULT_DP_MAX_TABLE_BYTES,
        }
    }
}
