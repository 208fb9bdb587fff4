// src/config/mod.rs

//! Plan file loading and validation for stepdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate it into scheduler-ready steps (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_plan_path, load_and_validate, load_from_path, load_from_str};
pub use model::{ConfigSection, PlanFile, RawPlanFile, StepConfig, DEFAULT_POOL_CAPACITY};
