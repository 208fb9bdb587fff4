use std::collections::HashMap;

use stepdag::{Schedule, ScheduleEntry, Step, StepClass};

/// Check every schedule invariant; returns a description of the first
/// violation found.
///
/// Usable from plain tests (`.unwrap()`) and from proptest (`prop_assert!`).
pub fn check_schedule(steps: &[Step], schedule: &Schedule, pool_capacity: usize) -> Result<(), String> {
    if schedule.len() != steps.len() {
        return Err(format!(
            "schedule has {} entries for {} steps",
            schedule.len(),
            steps.len()
        ));
    }

    let by_id: HashMap<&str, &ScheduleEntry> =
        schedule.iter().map(|e| (e.id.as_str(), e)).collect();
    if by_id.len() != steps.len() {
        return Err("schedule contains duplicate ids".to_string());
    }

    for step in steps {
        let entry = by_id
            .get(step.id.as_str())
            .ok_or_else(|| format!("step '{}' missing from schedule", step.id))?;
        if entry.start < 0 {
            return Err(format!("step '{}' starts before 0", step.id));
        }
        if entry.finish != entry.start + step.duration {
            return Err(format!(
                "step '{}': finish {} != start {} + duration {}",
                step.id, entry.finish, entry.start, step.duration
            ));
        }
        if entry.class != step.class {
            return Err(format!("step '{}' has the wrong class", step.id));
        }
        for pred in &step.predecessors {
            let p = by_id
                .get(pred.as_str())
                .ok_or_else(|| format!("predecessor '{pred}' missing from schedule"))?;
            if entry.start < p.finish {
                return Err(format!(
                    "step '{}' starts at {} before predecessor '{}' finishes at {}",
                    step.id, entry.start, pred, p.finish
                ));
            }
        }
    }

    let starts: Vec<_> = schedule.iter().map(|e| e.start).collect();
    if starts.windows(2).any(|w| w[0] > w[1]) {
        return Err("schedule is not sorted by start time".to_string());
    }

    let exclusive_peak = peak_concurrency(schedule, StepClass::Exclusive);
    if exclusive_peak > 1 {
        return Err(format!("{exclusive_peak} exclusive steps overlap"));
    }

    let pooled_peak = peak_concurrency(schedule, StepClass::Pooled);
    if pooled_peak > pool_capacity {
        return Err(format!(
            "{pooled_peak} pooled steps overlap with pool capacity {pool_capacity}"
        ));
    }

    Ok(())
}

/// Maximum number of `[start, finish)` intervals of `class` active at any
/// instant. Zero-length intervals occupy no time and are ignored.
pub fn peak_concurrency(schedule: &Schedule, class: StepClass) -> usize {
    let mut events: Vec<(i64, i32)> = Vec::new();
    for e in schedule.iter().filter(|e| e.class == class && e.finish > e.start) {
        events.push((e.start, 1));
        events.push((e.finish, -1));
    }
    // Ends sort before starts at the same instant.
    events.sort();

    let mut active: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in events {
        active += delta;
        peak = peak.max(active);
    }
    peak as usize
}
