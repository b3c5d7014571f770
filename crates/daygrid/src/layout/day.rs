//! The computed layout of one day.

use indexmap::IndexMap;

use daygrid_core::{geometry::Position, identifier::EventId, time::Interval};

/// Where one event ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    interval: Interval,
    column: usize,
    columns: usize,
    cluster: usize,
}

impl Placement {
    pub(super) fn new(interval: Interval, column: usize, columns: usize, cluster: usize) -> Self {
        Self {
            interval,
            column,
            columns,
            cluster,
        }
    }

    /// The effective interval the event was laid out with.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Zero-based column index within the event's cluster.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of columns of the event's cluster.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Index of the event's cluster within the day, in time order.
    pub fn cluster(&self) -> usize {
        self.cluster
    }

    /// Horizontal span in percent of the day column.
    pub fn position(&self) -> Position {
        Position::for_column(self.column, self.columns)
    }
}

/// A group of transitively overlapping events sharing one column width.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterLayout {
    span: Interval,
    columns: Vec<Vec<EventId>>,
}

impl ClusterLayout {
    pub(super) fn new(span: Interval, columns: Vec<Vec<EventId>>) -> Self {
        Self { span, columns }
    }

    /// From the earliest start to the latest effective end of the cluster.
    pub fn span(&self) -> Interval {
        self.span
    }

    /// Events of each column, left to right, in time order.
    ///
    /// Each id is listed once, under its final placement. A column can be
    /// empty only when a repeated id was placed again elsewhere.
    pub fn columns(&self) -> &[Vec<EventId>] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All events of the cluster.
    pub fn events(&self) -> impl Iterator<Item = EventId> + '_ {
        self.columns.iter().flatten().copied()
    }
}

/// Layout of a single day: one [`Placement`] per event plus the clusters
/// they were grouped into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayLayout {
    placements: IndexMap<EventId, Placement>,
    clusters: Vec<ClusterLayout>,
}

impl DayLayout {
    pub(super) fn new(placements: IndexMap<EventId, Placement>, clusters: Vec<ClusterLayout>) -> Self {
        Self {
            placements,
            clusters,
        }
    }

    /// Position of every event, keyed by identifier, in layout order.
    pub fn positions(&self) -> IndexMap<EventId, Position> {
        self.placements
            .iter()
            .map(|(id, placement)| (*id, placement.position()))
            .collect()
    }

    pub fn position(&self, id: EventId) -> Option<Position> {
        self.placements.get(&id).map(Placement::position)
    }

    pub fn placement(&self, id: EventId) -> Option<&Placement> {
        self.placements.get(&id)
    }

    /// Placements in layout order: start ascending, longer first on ties.
    pub fn placements(&self) -> impl Iterator<Item = (EventId, &Placement)> {
        self.placements.iter().map(|(id, placement)| (*id, placement))
    }

    pub fn clusters(&self) -> &[ClusterLayout] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
