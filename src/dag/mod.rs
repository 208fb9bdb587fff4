// src/dag/mod.rs

//! Dependency graph and schedule computation.
//!
//! - [`step`] defines input steps and output schedule entries.
//! - [`graph`] builds the dependency graph and checks references.
//! - [`topo`] sequences the graph with a FIFO-queue Kahn's algorithm.
//! - [`pool`] holds the per-run exclusive / pooled resource state.
//! - [`scheduler`] runs the single greedy pass over the topological order.
//! - [`ranker`] sorts the resulting entries into the final schedule.

pub mod graph;
pub mod pool;
pub mod ranker;
pub mod scheduler;
pub mod step;
pub mod topo;

pub use graph::DagGraph;
pub use pool::PoolState;
pub use scheduler::Scheduler;
pub use step::{Schedule, ScheduleEntry, Step};
pub use topo::TopologicalOrder;

use crate::errors::Result;
use crate::types::StepId;

/// Compute a schedule for `steps` with `pool_capacity` pooled slots.
///
/// Fails without producing any entries on malformed steps, unknown
/// predecessors, dependency cycles, or a zero pool capacity when pooled steps
/// are present.
pub fn build_schedule(steps: &[Step], pool_capacity: usize) -> Result<Schedule> {
    Scheduler::new(steps)?.run(pool_capacity)
}

/// Structural check only: ids, durations, references and acyclicity. No
/// resource simulation.
pub fn validate(steps: &[Step]) -> Result<()> {
    Scheduler::new(steps).map(|_| ())
}

/// Step ids in the deterministic topological order used for scheduling.
pub fn topological_order(steps: &[Step]) -> Result<Vec<StepId>> {
    let scheduler = Scheduler::new(steps)?;
    Ok(scheduler.topological_order().map(str::to_string).collect())
}
