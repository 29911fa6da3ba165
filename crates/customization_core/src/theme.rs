//! Derived-theme computation. A pure function of the current attribute
//! values: no time, no randomness, identical inputs give identical output.

use std::collections::HashMap;

use catalog::domain::AttributeCategory;
use serde::Serialize;

/// Legacy normalization constant for the three scalar categories. Fixed on
/// purpose, independent of the schema's actual max: a spice spec with
/// max 3 still normalizes by 5.
pub const SCALAR_INTENSITY_DIVISOR: f32 = 5.0;
/// Legacy normalization constant for portion size.
pub const PORTION_INTENSITY_DIVISOR: f32 = 10.0;

/// A scalar category is reported as dominant only above this intensity.
pub const DOMINANCE_THRESHOLD: f32 = 0.3;
/// Portion fallback: large-portion theming kicks in above this intensity.
pub const LARGE_PORTION_THRESHOLD: f32 = 0.7;
pub const PULSE_THRESHOLD: f32 = 0.8;
pub const GLOW_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantCategory {
    Spice,
    Sweet,
    Salty,
    LargePortion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeSnapshot {
    pub dominant: Option<DominantCategory>,
    pub intensity: f32,
    pub should_pulse: bool,
    pub should_glow: bool,
}

fn value_or_fallback(values: &HashMap<AttributeCategory, f32>, category: AttributeCategory) -> f32 {
    values
        .get(&category)
        .copied()
        .unwrap_or_else(|| category.fallback_default())
}

/// Maps the current attribute values to a dominant category and an overall
/// visual intensity. Categories absent from the map read the legacy
/// fallback defaults.
pub fn derive(values: &HashMap<AttributeCategory, f32>) -> ThemeSnapshot {
    let spice =
        value_or_fallback(values, AttributeCategory::SpiceLevel) / SCALAR_INTENSITY_DIVISOR;
    let sweet = value_or_fallback(values, AttributeCategory::Sweetness) / SCALAR_INTENSITY_DIVISOR;
    let salty = value_or_fallback(values, AttributeCategory::Saltiness) / SCALAR_INTENSITY_DIVISOR;
    let portion =
        value_or_fallback(values, AttributeCategory::PortionSize) / PORTION_INTENSITY_DIVISOR;

    // Exact ties resolve in enumeration order: spice, sweet, salty.
    let strongest = spice.max(sweet).max(salty);
    let dominant = if spice >= strongest && spice > DOMINANCE_THRESHOLD {
        Some(DominantCategory::Spice)
    } else if sweet >= strongest && sweet > DOMINANCE_THRESHOLD {
        Some(DominantCategory::Sweet)
    } else if salty >= strongest && salty > DOMINANCE_THRESHOLD {
        Some(DominantCategory::Salty)
    } else if portion > LARGE_PORTION_THRESHOLD {
        Some(DominantCategory::LargePortion)
    } else {
        None
    };

    // Values above the legacy 5/10 baselines (wider schema max) could push
    // the average past 1, so clamp explicitly.
    let intensity = ((spice + sweet + salty + portion) / 4.0).clamp(0.0, 1.0);

    ThemeSnapshot {
        dominant,
        intensity,
        should_pulse: intensity > PULSE_THRESHOLD,
        should_glow: intensity > GLOW_THRESHOLD,
    }
}
