use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Canonical step identifier used throughout the crate.
pub type StepId = String;

/// Time value in whole units (the plan decides what a unit means, usually
/// minutes).
pub type Time = i64;

/// Concurrency class of a step: which shared resource it occupies while
/// running.
///
/// - `Unconstrained`: only waits for its predecessors (e.g. baking).
/// - `Exclusive`: needs the single exclusive resource; at most one such step
///   runs at any instant (e.g. chopping).
/// - `Pooled`: needs one of `M` pooled slots (e.g. sauteeing on one of two
///   burners).
///
/// Plan files may also use the older vocabulary `passive`, `active` and
/// `partial` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepClass {
    Unconstrained,
    Exclusive,
    Pooled,
}

impl StepClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepClass::Unconstrained => "unconstrained",
            StepClass::Exclusive => "exclusive",
            StepClass::Pooled => "pooled",
        }
    }
}

impl fmt::Display for StepClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unconstrained" | "passive" => Ok(StepClass::Unconstrained),
            "exclusive" | "active" => Ok(StepClass::Exclusive),
            "pooled" | "partial" => Ok(StepClass::Pooled),
            other => Err(format!(
                "unrecognized step class \"{other}\" (expected \"unconstrained\", \"exclusive\" or \"pooled\")"
            )),
        }
    }
}
