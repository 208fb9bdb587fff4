use tracing::{debug, info};

use crate::dag::graph::DagGraph;
use crate::dag::pool::PoolState;
use crate::dag::ranker::rank;
use crate::dag::step::{Schedule, ScheduleEntry, Step};
use crate::dag::topo::TopologicalOrder;
use crate::errors::{Result, StepdagError};
use crate::types::{StepClass, Time};

/// Scheduler holds a validated step set plus its dependency graph and
/// topological order.
///
/// It is responsible for:
/// - rejecting malformed steps (negative durations, duplicate ids, ...)
/// - building the graph and the topological order once
/// - running the single greedy pass that assigns start/finish times
///
/// The scheduler itself is immutable. Each call to [`Scheduler::run`] creates
/// its own [`PoolState`], so one scheduler can produce schedules for several
/// pool capacities.
#[derive(Debug)]
pub struct Scheduler<'a> {
    steps: &'a [Step],
    graph: DagGraph,
    order: TopologicalOrder,
}

impl<'a> Scheduler<'a> {
    /// Validate `steps` and prepare them for scheduling.
    pub fn new(steps: &'a [Step]) -> Result<Self> {
        validate_durations(steps)?;
        let graph = DagGraph::build(steps)?;
        let order = TopologicalOrder::sequence(&graph)?;

        debug!(steps = steps.len(), "scheduler: step set validated");

        Ok(Self {
            steps,
            graph,
            order,
        })
    }

    /// Step ids in topological order.
    pub fn topological_order(&self) -> impl Iterator<Item = &str> {
        self.order.ids(&self.graph)
    }

    /// Compute the schedule with `pool_capacity` pooled slots.
    pub fn run(&self, pool_capacity: usize) -> Result<Schedule> {
        self.check_pool_capacity(pool_capacity)?;

        let pooled_steps = self
            .steps
            .iter()
            .filter(|s| s.class == StepClass::Pooled)
            .count();
        let mut pool = PoolState::new(pool_capacity, pooled_steps);
        let mut finish: Vec<Time> = vec![0; self.steps.len()];
        let mut entries: Vec<(usize, ScheduleEntry)> = Vec::with_capacity(self.steps.len());

        for &idx in self.order.indices() {
            let step = &self.steps[idx];

            // Predecessors precede `idx` in the order, so their finish times
            // are already final.
            let dep_time = self
                .graph
                .predecessors(idx)
                .iter()
                .map(|&p| finish[p])
                .max()
                .unwrap_or(0);

            let start = match step.class {
                StepClass::Unconstrained => dep_time,
                StepClass::Exclusive => pool.acquire_exclusive(dep_time, step.duration),
                StepClass::Pooled => pool.acquire_pooled(dep_time, step.duration)?,
            };
            let end = start + step.duration;
            finish[idx] = end;

            debug!(
                step = %step.id,
                class = %step.class,
                dep_time,
                start,
                finish = end,
                "scheduled step"
            );

            entries.push((
                self.order.position_of(idx),
                ScheduleEntry {
                    id: step.id.clone(),
                    class: step.class,
                    start,
                    finish: end,
                },
            ));
        }

        let schedule = rank(entries);
        info!(
            steps = schedule.len(),
            pool_capacity,
            makespan = schedule.makespan(),
            "schedule computed"
        );
        Ok(schedule)
    }

    /// A pooled step can never start without at least one slot.
    fn check_pool_capacity(&self, pool_capacity: usize) -> Result<()> {
        if pool_capacity > 0 {
            return Ok(());
        }
        match self.steps.iter().find(|s| s.class == StepClass::Pooled) {
            Some(step) => Err(StepdagError::ConfigurationError(format!(
                "pool capacity is 0 but step '{}' is pooled and can never acquire a slot",
                step.id
            ))),
            None => Ok(()),
        }
    }
}

/// Reject negative durations, and step sets whose total duration would not
/// fit in a [`Time`]. No start or finish time can exceed that total, so the
/// scheduling pass itself cannot overflow.
fn validate_durations(steps: &[Step]) -> Result<()> {
    let mut total: Time = 0;
    for step in steps {
        if step.duration < 0 {
            return Err(StepdagError::invalid_step(
                &step.id,
                format!("duration must be >= 0 (got {})", step.duration),
            ));
        }
        total = total.checked_add(step.duration).ok_or_else(|| {
            StepdagError::invalid_step(&step.id, "total duration of all steps overflows")
        })?;
    }
    Ok(())
}
