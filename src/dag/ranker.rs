// src/dag/ranker.rs

use crate::dag::step::{Schedule, ScheduleEntry};

/// Order entries by start time, breaking ties by topological position.
///
/// Each entry is paired with its position in the topological order. The sort
/// is stable, so equal keys keep their incoming order.
pub fn rank(mut entries: Vec<(usize, ScheduleEntry)>) -> Schedule {
    entries.sort_by_key(|(topo_position, entry)| (entry.start, *topo_position));
    Schedule::from_ranked(entries.into_iter().map(|(_, entry)| entry).collect())
}
