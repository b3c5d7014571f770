//! First-fit column packing within one cluster.

use daygrid_core::time::{Interval, Timestamp};

/// Result of packing one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Packing {
    /// Column index per input interval, in input order.
    pub assignments: Vec<usize>,
    /// Number of columns opened.
    pub columns: usize,
}

/// Assigns each start-ordered interval to the first column whose last
/// interval ends at or before its start, opening a new column when none fits.
///
/// Processed in start order this never opens more columns than the maximum
/// number of intervals active at the same instant.
pub(super) fn pack(intervals: &[Interval]) -> Packing {
    // End of the last interval placed in each column, in creation order.
    let mut column_ends: Vec<Timestamp> = Vec::new();

    let assignments = intervals
        .iter()
        .map(|interval| {
            let free = column_ends
                .iter()
                .position(|end| *end <= interval.start());

            match free {
                Some(column) => {
                    column_ends[column] = interval.end();
                    column
                }
                None => {
                    column_ends.push(interval.end());
                    column_ends.len() - 1
                }
            }
        })
        .collect();

    Packing {
        assignments,
        columns: column_ends.len(),
    }
}
