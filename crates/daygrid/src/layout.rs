//! Side-by-side layout of the events of one calendar day.
//!
//! The engine turns a day's events into horizontal positions in three steps:
//! events are ordered by start (longer first on ties), grouped into clusters
//! of transitively overlapping events, and packed first-fit into columns
//! within each cluster. Every event of a cluster gets the same width,
//! `100 / columns`.

mod cluster;
mod column;
mod day;
mod engine;

pub use day::{ClusterLayout, DayLayout, Placement};
pub use engine::{LayoutEngine, compute_layout};
