#![allow(dead_code)]

use stepdag::config::{ConfigSection, PlanFile, RawPlanFile, StepConfig};
use stepdag::{Step, StepClass, Time};

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile {
                config: ConfigSection::default(),
                step: Vec::new(),
            },
        }
    }

    pub fn with_step(mut self, step: StepConfig) -> Self {
        self.plan.step.push(step);
        self
    }

    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.plan.config.pool_capacity = capacity;
        self
    }

    /// The unvalidated plan, for tests that exercise validation failures.
    pub fn build_raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `StepConfig`.
pub struct StepConfigBuilder {
    step: StepConfig,
}

impl StepConfigBuilder {
    pub fn new(id: &str, duration: i64, class: &str) -> Self {
        Self {
            step: StepConfig {
                id: id.to_string(),
                duration,
                class: class.to_string(),
                description: None,
                after: vec![],
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.step.after.push(dep.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.step.description = Some(text.to_string());
        self
    }

    pub fn build(self) -> StepConfig {
        self.step
    }
}

/// Shorthand constructors for in-memory steps.
pub fn unconstrained(id: &str, duration: Time) -> Step {
    Step::new(id, duration, StepClass::Unconstrained)
}

pub fn exclusive(id: &str, duration: Time) -> Step {
    Step::new(id, duration, StepClass::Exclusive)
}

pub fn pooled(id: &str, duration: Time) -> Step {
    Step::new(id, duration, StepClass::Pooled)
}

/// The 21-step beef bourguignon plan: a realistic mix of all three classes
/// with fan-in dependencies. Intended for `pool_capacity = 2`.
pub fn bourguignon_steps() -> Vec<Step> {
    vec![
        exclusive("1", 5).with_description("Chop onion for marinade"),
        exclusive("2", 3).with_description("Peel and crush garlic cloves"),
        exclusive("3", 2)
            .after("1")
            .after("2")
            .with_description("Mix wine with onion, garlic, bay leaves and peppercorns"),
        unconstrained("4", 240)
            .after("3")
            .with_description("Marinate beef in wine mixture"),
        unconstrained("5", 10).with_description("Preheat oven"),
        exclusive("6", 5)
            .after("4")
            .with_description("Remove meat from marinade and pat dry"),
        exclusive("7", 2).with_description("Prepare flour mixture with salt and pepper"),
        exclusive("8", 5)
            .after("6")
            .after("7")
            .with_description("Coat beef cubes in flour mixture"),
        exclusive("9", 3).with_description("Cut bacon into pieces"),
        exclusive("10", 8).with_description("Peel pearl onions"),
        exclusive("11", 7).with_description("Peel and cube carrots"),
        pooled("12", 8).after("9").with_description("Fry bacon in olive oil"),
        exclusive("13", 1)
            .after("12")
            .with_description("Transfer bacon to casserole"),
        pooled("14", 10)
            .after("10")
            .after("11")
            .after("13")
            .with_description("Brown pearl onions and carrots"),
        exclusive("15", 1)
            .after("14")
            .with_description("Transfer vegetables to casserole"),
        pooled("16", 15)
            .after("8")
            .after("15")
            .with_description("Brown meat in batches"),
        pooled("17", 3)
            .after("16")
            .with_description("Add remaining flour to pan and brown"),
        pooled("18", 10)
            .after("17")
            .with_description("Add reserved marinade to pan and reduce"),
        exclusive("19", 2)
            .after("18")
            .with_description("Add beef broth and tomato paste"),
        exclusive("20", 3)
            .after("16")
            .after("19")
            .with_description("Combine all ingredients in casserole"),
        unconstrained("21", 120)
            .after("5")
            .after("20")
            .with_description("Cook in oven"),
    ]
}
