// src/report.rs

//! Rendering of a computed schedule for humans and downstream tools.

use std::collections::HashMap;
use std::fmt::Write as _;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::dag::{Schedule, ScheduleEntry, Step};
use crate::errors::Result;
use crate::types::{StepClass, Time};

/// JSON document shape.
#[derive(Debug, Serialize)]
pub struct ScheduleReport<'a> {
    pub pool_capacity: usize,
    pub makespan: Time,
    pub steps: Vec<ReportStep<'a>>,
}

/// One numbered step in a [`ScheduleReport`].
#[derive(Debug, Serialize)]
pub struct ReportStep<'a> {
    /// 1-based position in the schedule.
    pub step_number: usize,
    pub id: &'a str,
    pub class: StepClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub start: Time,
    pub finish: Time,
}

impl<'a> ScheduleReport<'a> {
    pub fn new(steps: &'a [Step], schedule: &'a Schedule, pool_capacity: usize) -> Self {
        let descriptions: HashMap<&str, &str> = steps
            .iter()
            .filter_map(|s| s.description.as_deref().map(|d| (s.id.as_str(), d)))
            .collect();

        let steps = schedule
            .iter()
            .enumerate()
            .map(|(i, entry)| ReportStep {
                step_number: i + 1,
                id: &entry.id,
                class: entry.class,
                description: descriptions.get(entry.id.as_str()).copied(),
                start: entry.start,
                finish: entry.finish,
            })
            .collect();

        Self {
            pool_capacity,
            makespan: schedule.makespan(),
            steps,
        }
    }
}

/// Render `schedule` in the requested format.
pub fn render(
    steps: &[Step],
    schedule: &Schedule,
    pool_capacity: usize,
    format: OutputFormat,
) -> Result<String> {
    let report = ScheduleReport::new(steps, schedule, pool_capacity);
    match format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Dot => Ok(render_dot(steps, schedule)),
    }
}

fn render_text(report: &ScheduleReport<'_>) -> String {
    let id_width = report
        .steps
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0)
        .max("step".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "stepdag schedule (pool_capacity = {}, steps = {})",
        report.pool_capacity,
        report.steps.len()
    );
    let _ = writeln!(
        out,
        "{:>4}  {:<id_width$}  {:<13}  {:>8}  {:>8}",
        "#", "step", "class", "start", "finish"
    );
    for s in &report.steps {
        let _ = write!(
            out,
            "{:>4}  {:<id_width$}  {:<13}  {:>8}  {:>8}",
            s.step_number,
            s.id,
            s.class.as_str(),
            s.start,
            s.finish
        );
        if let Some(desc) = s.description {
            let _ = write!(out, "  {desc}");
        }
        out.push('\n');
    }
    let _ = write!(out, "makespan = {}", report.makespan);
    out
}

/// Graphviz digraph with edges predecessor -> step, nodes in enumeration
/// order.
fn render_dot(steps: &[Step], schedule: &Schedule) -> String {
    let mut graph: DiGraph<String, ()> = DiGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::with_capacity(steps.len());
    let timings: HashMap<&str, &ScheduleEntry> =
        schedule.iter().map(|e| (e.id.as_str(), e)).collect();

    for step in steps {
        let label = match timings.get(step.id.as_str()) {
            Some(entry) => format!("{} [{}, {})", step.id, entry.start, entry.finish),
            None => step.id.clone(),
        };
        nodes.insert(step.id.as_str(), graph.add_node(label));
    }

    for step in steps {
        let Some(&to) = nodes.get(step.id.as_str()) else {
            continue;
        };
        for pred in &step.predecessors {
            if let Some(&from) = nodes.get(pred.as_str()) {
                graph.add_edge(from, to, ());
            }
        }
    }

    format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}
