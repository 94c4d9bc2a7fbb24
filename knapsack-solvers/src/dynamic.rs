//! Bottom-up dynamic programming over items and scaled capacity.

use std::mem::size_of;

use knapsack_core::{
    Diagnostics, Instance, Outcome, Selection, SolveError, SolveResult, Solver, SolverLimits,
    Strategy,
};

/// One table cell: the best scaled value for a prefix of items and a capacity.
type Cell = u64;

/// Exact solver that fills an `(n + 1) × (C + 1)` table, `C` being the scaled
/// capacity, and walks it backwards to recover the chosen items.
///
/// The table footprint is estimated before anything is allocated. Instances
/// whose table would exceed the configured ceiling are skipped.
#[derive(Debug, Clone)]
pub struct DynamicProgrammingSolver {
    max_table_bytes: u64,
}

impl Default for DynamicProgrammingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicProgrammingSolver {
    /// Construct a solver using the default memory ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(&SolverLimits::default())
    }

    /// Construct a solver using the table ceiling from `limits`.
    #[must_use]
    pub const fn with_limits(limits: &SolverLimits) -> Self {
        Self {
            max_table_bytes: limits.dp_max_table_bytes,
        }
    }
}

/// Shape of the table for one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableShape {
    rows: usize,
    width: usize,
    cells: usize,
    bytes: u64,
}

impl TableShape {
    /// Projected shape, or `None` when the table is not addressable.
    fn of(instance: &Instance) -> Option<Self> {
        let rows = instance.len().checked_add(1)?;
        let width = usize::try_from(instance.scaled_capacity())
            .ok()?
            .checked_add(1)?;
        let cells = rows.checked_mul(width)?;
        let bytes = u64::try_from(cells.checked_mul(size_of::<Cell>())?).ok()?;
        Some(Self {
            rows,
            width,
            cells,
            bytes,
        })
    }
}

impl Solver for DynamicProgrammingSolver {
    fn strategy(&self) -> Strategy {
        Strategy::DynamicProgramming
    }

    fn solve(&self, instance: &Instance) -> Result<SolveResult, SolveError> {
        let shape = TableShape::of(instance).filter(|shape| shape.bytes <= self.max_table_bytes);
        let Some(shape) = shape else {
            let required_bytes = TableShape::of(instance).map_or(u64::MAX, |shape| shape.bytes);
            log::info!(
                "dynamic programming skipped: table needs {required_bytes} bytes, limit is {}",
                self.max_table_bytes
            );
            return Ok(SolveResult::skipped(
                self.strategy(),
                Outcome::SkippedMemoryLimit {
                    required_bytes,
                    limit_bytes: self.max_table_bytes,
                },
                instance.len(),
            ));
        };
        log::debug!(
            "dynamic programming table: {} rows x {} columns ({} bytes)",
            shape.rows,
            shape.width,
            shape.bytes
        );

        let table = fill_table(instance, shape)?;
        let selection = reconstruct(instance, &table, shape.width);
        Ok(SolveResult::from_selection(
            self.strategy(),
            Outcome::Optimal,
            instance,
            selection,
            Diagnostics {
                states_explored: u64::try_from(shape.cells).unwrap_or(u64::MAX),
            },
        ))
    }
}

/// Allocate and fill the table row by row.
///
/// Row `i` holds `dp[i][j]` for `j` in `0..width`; row 0 is all zeros.
fn fill_table(instance: &Instance, shape: TableShape) -> Result<Vec<Cell>, SolveError> {
    let mut table: Vec<Cell> = Vec::new();
    if table.try_reserve_exact(shape.cells).is_err() {
        log::warn!(
            "dynamic programming could not allocate {} bytes",
            shape.bytes
        );
        return Err(SolveError::Allocation { bytes: shape.bytes });
    }
    table.resize(shape.cells, 0);

    let mut rows = table.chunks_exact_mut(shape.width);
    let Some(mut previous) = rows.next() else {
        return Ok(table);
    };
    for (item, current) in instance.items().iter().zip(rows) {
        let weight = usize::try_from(item.scaled_weight())
            .map_or(shape.width, |weight| weight.min(shape.width));
        let value = item.scaled_value();
        let (unreachable, reachable) = current.split_at_mut(weight);
        let (previous_head, previous_tail) = previous.split_at(weight);
        unreachable.copy_from_slice(previous_head);
        // `previous_tail[k]` is dp[i-1][weight + k]; `previous[k]` is dp[i-1][k].
        for ((cell, &exclude), &base) in reachable.iter_mut().zip(previous_tail).zip(&*previous) {
            *cell = exclude.max(base.saturating_add(value));
        }
        previous = current;
    }
    Ok(table)
}

/// Walk the filled table from the last row upwards, marking the items whose
/// row changed the optimum at the remaining capacity.
fn reconstruct(instance: &Instance, table: &[Cell], width: usize) -> Selection {
    let mut selection = Selection::empty(instance.len());
    let mut remaining = width.saturating_sub(1);
    for (row, item) in instance.items().iter().enumerate().rev() {
        let above = table.get(row * width + remaining);
        let here = table.get((row + 1) * width + remaining);
        if above != here {
            selection.select(item.original_index());
            let weight = usize::try_from(item.scaled_weight()).unwrap_or(usize::MAX);
            remaining = remaining.saturating_sub(weight);
        }
    }
    selection
}
