// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::PlanFile;

pub use crate::dag::{build_schedule, topological_order, validate};
pub use crate::dag::{Schedule, ScheduleEntry, Step};
pub use crate::errors::StepdagError;
pub use crate::types::{StepClass, StepId, Time};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading and validation
/// - pool capacity resolution (CLI flag over `[config]`)
/// - scheduling
/// - rendering to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let plan = load_and_validate(&args.plan)?;
    info!(plan = %args.plan.display(), steps = plan.steps.len(), "plan loaded");

    if args.check {
        print_check(&plan)?;
        return Ok(());
    }

    let pool_capacity = args.pool_capacity.unwrap_or_else(|| plan.pool_capacity());
    debug!(pool_capacity, "resolved pool capacity");

    let schedule = build_schedule(&plan.steps, pool_capacity)?;
    let rendered = report::render(&plan.steps, &schedule, pool_capacity, args.format)?;
    println!("{rendered}");

    Ok(())
}

/// `--check` output: the plan is valid, here is the order it would be
/// scheduled in.
fn print_check(plan: &PlanFile) -> Result<()> {
    let order = topological_order(&plan.steps)?;

    println!("stepdag check");
    println!("  config.pool_capacity = {}", plan.pool_capacity());
    println!();
    println!("topological order ({}):", order.len());
    for (i, id) in order.iter().enumerate() {
        println!("  {:>3}. {id}", i + 1);
    }

    debug!("check complete (no scheduling)");
    Ok(())
}
