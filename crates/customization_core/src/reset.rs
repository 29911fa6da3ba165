//! Interpolation schedule for animating attribute values back to their
//! schema defaults. The timed emission loop lives on the session; this
//! module only computes the frames, so it stays synchronous and testable.

use std::collections::HashMap;

use catalog::domain::{AttributeCategory, DishSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetState {
    Idle,
    Running,
}

/// Captured origin plus the schema-default target, split into a fixed
/// number of lerp steps.
#[derive(Debug, Clone)]
pub struct ResetPlan {
    origin: HashMap<AttributeCategory, f32>,
    target: Vec<(AttributeCategory, f32)>,
    steps: u32,
}

impl ResetPlan {
    pub fn new(origin: HashMap<AttributeCategory, f32>, dish: &DishSchema, steps: u32) -> Self {
        Self {
            origin,
            target: dish.default_values(),
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn progress(&self, step: u32) -> f32 {
        (step as f32 / self.steps as f32).min(1.0)
    }

    /// Values for emission `step` (0..=steps), in schema order. The final
    /// step lands on the target exactly instead of trusting float
    /// arithmetic to get there.
    pub fn frame(&self, step: u32) -> Vec<(AttributeCategory, f32)> {
        let fraction = self.progress(step);
        self.target
            .iter()
            .map(|&(category, end)| {
                let value = if step >= self.steps {
                    end
                } else {
                    let start = self.origin.get(&category).copied().unwrap_or(end);
                    lerp(start, end, fraction)
                };
                (category, value)
            })
            .collect()
    }
}

fn lerp(start: f32, end: f32, fraction: f32) -> f32 {
    start + fraction * (end - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::sample::sample_dishes;

    fn biryani_plan() -> ResetPlan {
        let dish = sample_dishes().remove(0);
        let origin: HashMap<_, _> = [
            (AttributeCategory::SpiceLevel, 5.0),
            (AttributeCategory::PortionSize, 10.0),
            (AttributeCategory::Saltiness, 1.0),
        ]
        .into_iter()
        .collect();
        ResetPlan::new(origin, &dish, 20)
    }

    #[test]
    fn first_frame_is_the_origin_and_last_frame_is_exactly_the_target() {
        let plan = biryani_plan();

        let first: HashMap<_, _> = plan.frame(0).into_iter().collect();
        assert_eq!(first[&AttributeCategory::SpiceLevel], 5.0);
        assert_eq!(first[&AttributeCategory::PortionSize], 10.0);
        assert_eq!(first[&AttributeCategory::Saltiness], 1.0);

        let last: HashMap<_, _> = plan.frame(20).into_iter().collect();
        assert_eq!(last[&AttributeCategory::SpiceLevel], 3.0);
        assert_eq!(last[&AttributeCategory::PortionSize], 5.0);
        assert_eq!(last[&AttributeCategory::Saltiness], 3.0);
    }

    #[test]
    fn midpoint_frame_is_the_halfway_interpolation() {
        let plan = biryani_plan();
        let mid: HashMap<_, _> = plan.frame(10).into_iter().collect();
        assert_eq!(mid[&AttributeCategory::SpiceLevel], 4.0);
        assert_eq!(mid[&AttributeCategory::PortionSize], 7.5);
        assert_eq!(mid[&AttributeCategory::Saltiness], 2.0);
        assert_eq!(plan.progress(10), 0.5);
    }

    #[test]
    fn progress_is_monotonic_over_the_run() {
        let plan = biryani_plan();
        let mut last = -1.0;
        for step in 0..=plan.steps() {
            let progress = plan.progress(step);
            assert!(progress > last);
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn zero_step_request_is_bumped_to_a_single_jump() {
        let dish = sample_dishes().remove(0);
        let plan = ResetPlan::new(HashMap::new(), &dish, 0);
        assert_eq!(plan.steps(), 1);
        let last: HashMap<_, _> = plan.frame(1).into_iter().collect();
        assert_eq!(last[&AttributeCategory::SpiceLevel], 3.0);
    }
}
