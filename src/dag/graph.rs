// src/dag/graph.rs

use std::collections::HashMap;

use crate::dag::step::Step;
use crate::errors::{Result, StepdagError};
use crate::types::StepId;

/// Internal node structure: stores immediate deps and dependents as indices
/// into the step enumeration order.
#[derive(Debug, Clone)]
struct DagNode {
    id: StepId,
    /// Direct dependencies: steps that must finish before this one can start.
    deps: Vec<usize>,
    /// Direct dependents, in step enumeration order.
    dependents: Vec<usize>,
}

/// Dependency graph derived from an ordered step collection.
///
/// Node `i` corresponds to `steps[i]`, so enumeration order is preserved and
/// every traversal over the graph is reproducible.
///
/// Acyclicity is *not* checked here; see [`crate::dag::topo`].
#[derive(Debug, Clone)]
pub struct DagGraph {
    nodes: Vec<DagNode>,
}

impl DagGraph {
    /// Build the graph from steps in enumeration order.
    ///
    /// Fails with:
    /// - `ValidationError` for empty or duplicate ids, or a predecessor listed
    ///   twice by the same step,
    /// - `ReferenceError` for a predecessor that is not in `steps`.
    pub fn build(steps: &[Step]) -> Result<Self> {
        // Id lookup for resolving references; never iterated.
        let mut index: HashMap<StepId, usize> = HashMap::with_capacity(steps.len());

        // First pass: assign indices and reject duplicate ids.
        for (i, step) in steps.iter().enumerate() {
            if step.id.trim().is_empty() {
                return Err(StepdagError::ValidationError {
                    step: None,
                    reason: format!("step #{} has an empty id", i + 1),
                });
            }
            if index.insert(step.id.clone(), i).is_some() {
                return Err(StepdagError::invalid_step(
                    &step.id,
                    "duplicate step id",
                ));
            }
        }

        let mut nodes: Vec<DagNode> = steps
            .iter()
            .map(|s| DagNode {
                id: s.id.clone(),
                deps: Vec::with_capacity(s.predecessors.len()),
                dependents: Vec::new(),
            })
            .collect();

        // Second pass: resolve predecessors and populate dependents.
        for (i, step) in steps.iter().enumerate() {
            for pred in step.predecessors.iter() {
                let Some(&p) = index.get(pred) else {
                    return Err(StepdagError::ReferenceError {
                        step: step.id.clone(),
                        missing: pred.clone(),
                    });
                };
                if nodes[i].deps.contains(&p) {
                    return Err(StepdagError::invalid_step(
                        &step.id,
                        format!("predecessor '{pred}' is listed more than once"),
                    ));
                }
                nodes[i].deps.push(p);
                nodes[p].dependents.push(i);
            }
        }

        Ok(Self { nodes })
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Id of the node at `idx`.
    pub fn id(&self, idx: usize) -> &str {
        &self.nodes[idx].id
    }

    pub(crate) fn predecessors(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].deps
    }

    pub(crate) fn successors(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].dependents
    }

    /// Number of predecessors per node, indexed by enumeration order.
    pub fn in_degrees(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.deps.len()).collect()
    }
}
