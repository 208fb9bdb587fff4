// src/config/model.rs

use serde::Deserialize;

use crate::dag::Step;

/// Default number of pooled slots when `[config].pool_capacity` is omitted.
pub const DEFAULT_POOL_CAPACITY: usize = 2;

/// Plan file as read from TOML, before any validation.
///
/// ```toml
/// [config]
/// pool_capacity = 2
///
/// [[step]]
/// id = "chop_onion"
/// duration = 5
/// class = "exclusive"
/// description = "Chop onion for marinade"
///
/// [[step]]
/// id = "marinate"
/// duration = 240
/// class = "unconstrained"
/// after = ["chop_onion"]
/// ```
///
/// Steps are an array of tables so that file order is the enumeration order
/// used for tie-breaking.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlanFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All steps from `[[step]]`, in file order.
    #[serde(default)]
    pub step: Vec<StepConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Number of pooled slots (`M`).
    #[serde(default = "default_pool_capacity")]
    pub pool_capacity: usize,
}

fn default_pool_capacity() -> usize {
    DEFAULT_POOL_CAPACITY
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            pool_capacity: default_pool_capacity(),
        }
    }
}

/// One `[[step]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub id: String,

    /// Duration in whole time units. Signed so that negative values reach
    /// validation and get reported against the step.
    pub duration: i64,

    /// `"unconstrained"`, `"exclusive"` or `"pooled"` (or the aliases
    /// `"passive"`, `"active"`, `"partial"`).
    pub class: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Predecessors: this step waits for all steps listed here.
    #[serde(default)]
    pub after: Vec<String>,
}

/// A validated plan: every step is well-formed, every reference resolves and
/// the dependency graph is acyclic.
///
/// Only obtainable through `PlanFile::try_from(RawPlanFile)`.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub config: ConfigSection,
    pub steps: Vec<Step>,
}

impl PlanFile {
    pub(crate) fn new_unchecked(config: ConfigSection, steps: Vec<Step>) -> Self {
        Self { config, steps }
    }

    pub fn pool_capacity(&self) -> usize {
        self.config.pool_capacity
    }
}
