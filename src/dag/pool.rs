// src/dag/pool.rs

//! Per-run resource pool state.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::errors::{Result, StepdagError};
use crate::types::Time;

/// Mutable resource state for a single scheduling run.
///
/// One value is created per call and dropped at the end of it; it is never
/// shared between runs. All stored times only ever increase.
#[derive(Debug, Clone)]
pub struct PoolState {
    /// Next time the exclusive resource is free.
    exclusive_next_free: Time,
    /// Min-heap of "free at" times, one per usable pooled slot.
    slots: BinaryHeap<Reverse<Time>>,
    capacity: usize,
}

impl PoolState {
    /// Create state for `capacity` pooled slots, all free at time 0.
    ///
    /// At most `pooled_steps` slots can ever be taken in one run, so only
    /// `min(capacity, pooled_steps)` of them are materialised.
    pub fn new(capacity: usize, pooled_steps: usize) -> Self {
        Self {
            exclusive_next_free: 0,
            slots: std::iter::repeat_n(Reverse(0), capacity.min(pooled_steps)).collect(),
            capacity,
        }
    }

    /// Reserve the exclusive resource for `duration`, no earlier than
    /// `ready_at`. Returns the start time.
    pub fn acquire_exclusive(&mut self, ready_at: Time, duration: Time) -> Time {
        let start = ready_at.max(self.exclusive_next_free);
        self.exclusive_next_free = start + duration;
        start
    }

    /// Reserve the earliest-free pooled slot for `duration`, no earlier than
    /// `ready_at`. Returns the start time.
    pub fn acquire_pooled(&mut self, ready_at: Time, duration: Time) -> Result<Time> {
        let Some(Reverse(free_at)) = self.slots.pop() else {
            return Err(StepdagError::ConfigurationError(format!(
                "no pooled slot available (pool capacity is {})",
                self.capacity
            )));
        };
        let start = ready_at.max(free_at);
        self.slots.push(Reverse(start + duration));
        Ok(start)
    }
}
