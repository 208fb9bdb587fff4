// src/dag/step.rs

//! Step definitions and the schedule types produced from them.

use serde::Serialize;

use crate::types::{StepClass, StepId, Time};

/// A unit of work to be scheduled.
///
/// Steps are supplied once per scheduling call and never mutated by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    /// Duration in time units. Must be non-negative; zero is an instantaneous
    /// step.
    pub duration: Time,
    pub class: StepClass,
    /// Steps that must finish before this one may start.
    pub predecessors: Vec<StepId>,
    pub description: Option<String>,
}

impl Step {
    pub fn new(id: impl Into<StepId>, duration: Time, class: StepClass) -> Self {
        Self {
            id: id.into(),
            duration,
            class,
            predecessors: Vec::new(),
            description: None,
        }
    }

    /// Add a predecessor (builder style).
    pub fn after(mut self, predecessor: impl Into<StepId>) -> Self {
        self.predecessors.push(predecessor.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Computed start/finish for one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub id: StepId,
    pub class: StepClass,
    pub start: Time,
    pub finish: Time,
}

/// Final ordered schedule: entries sorted by start time, ties broken by
/// topological position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub(crate) fn from_ranked(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a step id.
    pub fn get(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Latest finish time across all entries (0 for an empty schedule).
    pub fn makespan(&self) -> Time {
        self.entries.iter().map(|e| e.finish).max().unwrap_or(0)
    }

    /// `(id, start, finish)` triples in schedule order.
    pub fn triples(&self) -> Vec<(&str, Time, Time)> {
        self.entries
            .iter()
            .map(|e| (e.id.as_str(), e.start, e.finish))
            .collect()
    }
}
