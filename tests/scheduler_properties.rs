use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use stepdag::{build_schedule, topological_order, Step, StepClass};
use stepdag_test_utils::invariants::{check_schedule, peak_concurrency};

fn class_strategy() -> impl Strategy<Value = StepClass> {
    prop_oneof![
        Just(StepClass::Unconstrained),
        Just(StepClass::Exclusive),
        Just(StepClass::Pooled),
    ]
}

// Strategy to generate a valid step set.
// Acyclicity is guaranteed by only letting step N depend on steps 0..N-1;
// the steps are then emitted in a shuffled order so enumeration order and
// dependency order differ.
fn steps_strategy(max_steps: usize) -> impl Strategy<Value = Vec<Step>> {
    (1..=max_steps).prop_flat_map(|num_steps| {
        let per_step = (
            0..20i64,
            class_strategy(),
            proptest::collection::vec(any::<usize>(), 0..4),
        );
        proptest::collection::vec(per_step, num_steps)
            .prop_map(|raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, (duration, class, potential_deps))| {
                        // Sanitize dependencies: only allow deps < i, no repeats.
                        let deps: BTreeSet<usize> = if i > 0 {
                            potential_deps.into_iter().map(|d| d % i).collect()
                        } else {
                            BTreeSet::new()
                        };
                        let mut step = Step::new(format!("step_{i}"), duration, class);
                        for d in deps {
                            step = step.after(format!("step_{d}"));
                        }
                        step
                    })
                    .collect::<Vec<_>>()
            })
            .prop_shuffle()
    })
}

proptest! {
    #[test]
    fn topological_order_respects_every_dependency(steps in steps_strategy(25)) {
        let order = topological_order(&steps).unwrap();
        prop_assert_eq!(order.len(), steps.len());

        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        for step in &steps {
            for pred in &step.predecessors {
                prop_assert!(position[pred.as_str()] < position[step.id.as_str()]);
            }
        }
    }

    #[test]
    fn schedules_satisfy_all_invariants(
        steps in steps_strategy(25),
        pool_capacity in 1..4usize,
    ) {
        let schedule = build_schedule(&steps, pool_capacity).unwrap();

        if let Err(violation) = check_schedule(&steps, &schedule, pool_capacity) {
            prop_assert!(false, "{}", violation);
        }
        prop_assert!(peak_concurrency(&schedule, StepClass::Exclusive) <= 1);
        prop_assert!(peak_concurrency(&schedule, StepClass::Pooled) <= pool_capacity);
    }

    #[test]
    fn scheduling_is_deterministic(
        steps in steps_strategy(20),
        pool_capacity in 1..4usize,
    ) {
        let first = build_schedule(&steps, pool_capacity).unwrap();
        let second = build_schedule(&steps, pool_capacity).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unconstrained_only_plans_start_at_dependency_time(steps in steps_strategy(20)) {
        let steps: Vec<Step> = steps
            .into_iter()
            .map(|s| Step { class: StepClass::Unconstrained, ..s })
            .collect();
        let schedule = build_schedule(&steps, 0).unwrap();

        for step in &steps {
            let entry = schedule.get(&step.id).unwrap();
            let dep_time = step
                .predecessors
                .iter()
                .map(|p| schedule.get(p).unwrap().finish)
                .max()
                .unwrap_or(0);
            prop_assert_eq!(entry.start, dep_time);
        }
    }

    #[test]
    fn a_back_edge_always_produces_a_cycle_error(steps in steps_strategy(15)) {
        // Find a step with a predecessor and make that predecessor depend on it.
        let Some(pos) = steps.iter().position(|s| !s.predecessors.is_empty()) else {
            return Ok(());
        };
        let mut steps = steps;
        let child = steps[pos].id.clone();
        let parent = steps[pos].predecessors[0].clone();
        if let Some(p) = steps.iter_mut().find(|s| s.id == parent) {
            p.predecessors.push(child.clone());
        }

        match build_schedule(&steps, 2) {
            Err(stepdag::StepdagError::CycleError { steps: unresolved }) => {
                prop_assert!(unresolved.contains(&child));
                prop_assert!(unresolved.contains(&parent));
            }
            other => prop_assert!(false, "expected CycleError, got {:?}", other),
        }
    }
}
