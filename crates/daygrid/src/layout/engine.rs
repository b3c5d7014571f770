//! The day layout engine.

use chrono::TimeDelta;
use indexmap::IndexMap;
use log::{debug, trace, warn};

use daygrid_core::{
    event::{Event, default_duration},
    geometry::Position,
    identifier::EventId,
    time::Interval,
};

use super::{
    cluster,
    column,
    day::{ClusterLayout, DayLayout, Placement},
};

/// Lays out the events of one day side by side.
///
/// The engine holds only immutable settings, so one instance can serve any
/// number of days, including from several threads at once.
///
/// # Examples
///
/// ```
/// use daygrid::{event::Event, identifier::EventId, layout::LayoutEngine, time::Timestamp};
///
/// let at = |s: &str| s.parse::<Timestamp>().unwrap();
/// let events = [
///     Event::new("x", at("2024-05-06T09:00"), Some(at("2024-05-06T11:00"))),
///     Event::new("y", at("2024-05-06T10:00"), Some(at("2024-05-06T10:30"))),
/// ];
///
/// let layout = LayoutEngine::new().compute(&events);
/// let y = layout.position(EventId::new("y")).unwrap();
/// assert_eq!((y.left(), y.width()), (50.0, 50.0));
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    default_duration: TimeDelta,
}

impl LayoutEngine {
    /// Create an engine using the one-hour default duration.
    pub fn new() -> Self {
        Self {
            default_duration: default_duration(),
        }
    }

    /// Set the duration given to events without a usable end.
    ///
    /// A zero or negative duration would collapse such events to nothing, so
    /// it is replaced by the one-hour default.
    pub fn with_default_duration(mut self, duration: TimeDelta) -> Self {
        if duration > TimeDelta::zero() {
            self.default_duration = duration;
        } else {
            warn!(
                minutes = duration.num_minutes();
                "Default duration must be positive, keeping the one-hour default"
            );
            self.default_duration = default_duration();
        }
        self
    }

    pub fn default_duration(&self) -> TimeDelta {
        self.default_duration
    }

    /// Compute the layout of one day's events.
    ///
    /// The caller is responsible for passing only the events of a single day
    /// and for keeping identifiers unique; when an identifier repeats, the
    /// placement processed last is kept.
    pub fn compute(&self, events: &[Event]) -> DayLayout {
        let mut ordered: Vec<(EventId, Interval)> = events
            .iter()
            .map(|event| (event.id(), event.effective_interval(self.default_duration)))
            .collect();

        // Stable: equal start and duration keep input order.
        ordered.sort_by(|(_, a), (_, b)| {
            a.start()
                .cmp(&b.start())
                .then_with(|| b.duration().cmp(&a.duration()))
        });

        let intervals: Vec<Interval> = ordered.iter().map(|(_, interval)| *interval).collect();

        let mut placements = IndexMap::with_capacity(ordered.len());
        let mut packed = Vec::new();

        for (cluster_idx, range) in cluster::clusters(&intervals).into_iter().enumerate() {
            let members = &ordered[range.clone()];
            let packing = column::pack(&intervals[range]);

            let mut columns = vec![Vec::new(); packing.columns];
            let span_start = members[0].1.start();
            let mut span_end = members[0].1.end();

            for (&(id, interval), column) in members.iter().zip(packing.assignments) {
                columns[column].push((id, interval));
                span_end = span_end.max(interval.end());
                placements.insert(
                    id,
                    Placement::new(interval, column, packing.columns, cluster_idx),
                );
            }

            trace!(
                cluster = cluster_idx,
                events = members.len(),
                columns = packing.columns;
                "Packed cluster"
            );

            packed.push((Interval::new(span_start, span_end), columns));
        }

        // A repeated id keeps only its last placement; drop the earlier
        // occurrences from the column lists so each id is listed once.
        let clusters: Vec<ClusterLayout> = packed
            .into_iter()
            .enumerate()
            .map(|(cluster_idx, (span, columns))| {
                let columns = columns
                    .into_iter()
                    .enumerate()
                    .map(|(column_idx, members)| {
                        members
                            .into_iter()
                            .filter(|(id, interval)| {
                                placements.get(id).is_some_and(|placement| {
                                    placement.cluster() == cluster_idx
                                        && placement.column() == column_idx
                                        && placement.interval() == *interval
                                })
                            })
                            .map(|(id, _)| id)
                            .collect()
                    })
                    .collect();
                ClusterLayout::new(span, columns)
            })
            .collect();

        debug!(
            events = events.len(),
            clusters = clusters.len();
            "Day layout computed"
        );

        DayLayout::new(placements, clusters)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the horizontal position of each of one day's events using the
/// default engine settings.
///
/// Time-overlapping events never share horizontal extent; events of the same
/// overlap cluster share one width of `100 / columns` percent.
pub fn compute_layout(events: &[Event]) -> IndexMap<EventId, Position> {
    LayoutEngine::new().compute(events).positions()
}
