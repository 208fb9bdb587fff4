// src/config/validate.rs

use tracing::debug;

use crate::config::model::{PlanFile, RawPlanFile, StepConfig};
use crate::dag::{self, Step};
use crate::errors::{Result, StepdagError};
use crate::types::StepClass;

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::StepdagError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_steps(&raw)?;
        let steps = raw
            .step
            .iter()
            .map(step_from_config)
            .collect::<Result<Vec<_>>>()?;
        validate_global_config(&raw, &steps)?;
        dag::validate(&steps)?;

        debug!(steps = steps.len(), "plan file validated");
        Ok(PlanFile::new_unchecked(raw.config, steps))
    }
}

fn ensure_has_steps(raw: &RawPlanFile) -> Result<()> {
    if raw.step.is_empty() {
        return Err(StepdagError::ConfigurationError(
            "plan must contain at least one [[step]] table".to_string(),
        ));
    }
    Ok(())
}

fn step_from_config(cfg: &StepConfig) -> Result<Step> {
    let class: StepClass = cfg
        .class
        .parse()
        .map_err(|reason: String| StepdagError::invalid_step(&cfg.id, reason))?;

    Ok(Step {
        id: cfg.id.clone(),
        duration: cfg.duration,
        class,
        predecessors: cfg.after.clone(),
        description: cfg.description.clone(),
    })
}

fn validate_global_config(raw: &RawPlanFile, steps: &[Step]) -> Result<()> {
    if raw.config.pool_capacity > 0 {
        return Ok(());
    }
    if let Some(step) = steps.iter().find(|s| s.class == StepClass::Pooled) {
        return Err(StepdagError::ConfigurationError(format!(
            "[config].pool_capacity must be >= 1 when pooled steps exist (step '{}' is pooled)",
            step.id
        )));
    }
    Ok(())
}
