//! Grouping of start-ordered intervals into overlap clusters.

use std::ops::Range;

use daygrid_core::time::Interval;

/// Splits start-ordered `intervals` into maximal runs of transitively
/// overlapping intervals, returned as index ranges.
///
/// An interval joins the current run only if it starts strictly before the
/// latest end seen in that run, so intervals that merely touch open a new
/// cluster. Because the input is ordered by start, no later interval can
/// reach back into a closed run.
pub(super) fn clusters(intervals: &[Interval]) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    let mut iter = intervals.iter().enumerate();

    let Some((_, first)) = iter.next() else {
        return clusters;
    };

    let mut cluster_start = 0;
    let mut cluster_end = first.end();

    for (idx, interval) in iter {
        if interval.start() < cluster_end {
            cluster_end = cluster_end.max(interval.end());
        } else {
            clusters.push(cluster_start..idx);
            cluster_start = idx;
            cluster_end = interval.end();
        }
    }
    clusters.push(cluster_start..intervals.len());

    clusters
}

#[cfg(test)]
mod tests {
    use daygrid_core::time::Timestamp;

    use super::*;

    fn interval(start: &str, end: &str) -> Interval {
        let day = "2024-05-06T";
        Interval::new(
            format!("{day}{start}").parse::<Timestamp>().unwrap(),
            format!("{day}{end}").parse::<Timestamp>().unwrap(),
        )
    }

    #[test]
    fn test_empty_input_has_no_clusters() {
        assert!(clusters(&[]).is_empty());
    }

    #[test]
    fn test_single_interval() {
        assert_eq!(clusters(&[interval("09:00", "10:00")]), vec![0..1]);
    }

    #[test]
    fn test_touching_intervals_are_separate() {
        let intervals = [interval("09:00", "10:00"), interval("10:00", "11:00")];
        assert_eq!(clusters(&intervals), vec![0..1, 1..2]);
    }

    #[test]
    fn test_transitive_overlap_forms_one_cluster() {
        let intervals = [
            interval("09:00", "10:00"),
            interval("09:30", "10:30"),
            interval("10:15", "11:00"),
        ];
        assert_eq!(clusters(&intervals), vec![0..3]);
    }

    #[test]
    fn test_long_event_keeps_cluster_open() {
        let intervals = [
            interval("08:00", "12:00"),
            interval("08:30", "09:00"),
            interval("11:00", "11:30"),
            interval("12:00", "13:00"),
        ];
        assert_eq!(clusters(&intervals), vec![0..3, 3..4]);
    }

    #[test]
    fn test_gap_splits_clusters() {
        let intervals = [
            interval("09:00", "10:00"),
            interval("09:15", "09:45"),
            interval("13:00", "14:00"),
            interval("13:30", "15:00"),
            interval("16:00", "17:00"),
        ];
        assert_eq!(clusters(&intervals), vec![0..2, 2..4, 4..5]);
    }
}
