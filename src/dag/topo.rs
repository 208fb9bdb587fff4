// src/dag/topo.rs

//! Deterministic topological ordering (Kahn's algorithm with a FIFO ready
//! queue).

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::dag::graph::DagGraph;
use crate::errors::{Result, StepdagError};

/// A complete topological order over a [`DagGraph`].
///
/// `order[k]` is the enumeration index of the k-th step; `position[i]` is the
/// inverse mapping.
#[derive(Debug, Clone)]
pub struct TopologicalOrder {
    order: Vec<usize>,
    position: Vec<usize>,
}

impl TopologicalOrder {
    /// Sequence the graph.
    ///
    /// Ready steps are seeded in enumeration order and newly-ready successors
    /// are appended to the tail of the queue; that insertion order is the only
    /// tie-break between simultaneously ready steps.
    ///
    /// Returns `CycleError` listing every step that could not be ordered
    /// (members of a cycle and anything downstream of one).
    pub fn sequence(graph: &DagGraph) -> Result<Self> {
        let n = graph.len();
        let mut in_degree = graph.in_degrees();

        let mut ready: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(current) = ready.pop_front() {
            order.push(current);
            for &succ in graph.successors(current) {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    ready.push_back(succ);
                }
            }
        }

        if order.len() < n {
            let mut visited = vec![false; n];
            for &i in &order {
                visited[i] = true;
            }
            let steps: Vec<String> = (0..n)
                .filter(|&i| !visited[i])
                .map(|i| graph.id(i).to_string())
                .collect();
            warn!(?steps, "dependency cycle; steps could not be ordered");
            return Err(StepdagError::CycleError { steps });
        }

        let mut position = vec![0; n];
        for (k, &i) in order.iter().enumerate() {
            position[i] = k;
        }

        debug!(steps = n, "topological order computed");
        Ok(Self { order, position })
    }

    /// Enumeration indices in topological order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Topological position of the step at enumeration index `idx`.
    pub fn position_of(&self, idx: usize) -> usize {
        self.position[idx]
    }

    /// Step ids in topological order.
    pub fn ids<'g>(&'g self, graph: &'g DagGraph) -> impl Iterator<Item = &'g str> {
        self.order.iter().map(move |&i| graph.id(i))
    }
}
