use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(DishId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeCategory {
    SpiceLevel,
    PortionSize,
    Sweetness,
    Saltiness,
}

impl AttributeCategory {
    pub const ALL: [AttributeCategory; 4] = [
        AttributeCategory::SpiceLevel,
        AttributeCategory::PortionSize,
        AttributeCategory::Sweetness,
        AttributeCategory::Saltiness,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeCategory::SpiceLevel => "Spice Level",
            AttributeCategory::PortionSize => "Portion Size",
            AttributeCategory::Sweetness => "Sweetness",
            AttributeCategory::Saltiness => "Saltiness",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AttributeCategory::SpiceLevel => "🌶️",
            AttributeCategory::PortionSize => "🍽️",
            AttributeCategory::Sweetness => "🍯",
            AttributeCategory::Saltiness => "🧂",
        }
    }

    /// Legacy default used by readers when a dish schema omits the category.
    pub fn fallback_default(&self) -> f32 {
        match self {
            AttributeCategory::SpiceLevel => 3.0,
            AttributeCategory::PortionSize => 5.0,
            AttributeCategory::Sweetness => 3.0,
            AttributeCategory::Saltiness => 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub category: AttributeCategory,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    #[serde(default)]
    pub unit: String,
}

impl AttributeSpec {
    pub fn new(category: AttributeCategory, min: f32, max: f32, default: f32) -> Self {
        Self {
            category,
            min,
            max,
            default,
            unit: String::new(),
        }
    }

    /// Clamps a raw slider value into `[min, max]`. Never an error: drag
    /// overshoot past the rail is a normal occurrence.
    pub fn clamp(&self, raw: f32) -> f32 {
        raw.max(self.min).min(self.max)
    }

    pub fn validate(&self, dish_id: DishId) -> Result<(), CatalogError> {
        if !(self.min <= self.default && self.default <= self.max) {
            return Err(CatalogError::InvalidAttributeBounds {
                dish_id,
                category: self.category,
                min: self.min,
                max: self.max,
                default: self.default,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishSchema {
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_key: String,
    pub attributes: Vec<AttributeSpec>,
}

impl DishSchema {
    pub fn attribute(&self, category: AttributeCategory) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|spec| spec.category == category)
    }

    pub fn has_attribute(&self, category: AttributeCategory) -> bool {
        self.attribute(category).is_some()
    }

    /// Per-attribute defaults in schema order, used to seed a new
    /// customization session.
    pub fn default_values(&self) -> Vec<(AttributeCategory, f32)> {
        self.attributes
            .iter()
            .map(|spec| (spec.category, spec.default))
            .collect()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.price < 0.0 {
            return Err(CatalogError::NegativePrice {
                dish_id: self.id,
                price: self.price,
            });
        }
        for (index, spec) in self.attributes.iter().enumerate() {
            spec.validate(self.id)?;
            if self.attributes[..index]
                .iter()
                .any(|earlier| earlier.category == spec.category)
            {
                return Err(CatalogError::DuplicateAttribute {
                    dish_id: self.id,
                    category: spec.category,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(min: f32, max: f32, default: f32) -> AttributeSpec {
        AttributeSpec::new(AttributeCategory::SpiceLevel, min, max, default)
    }

    #[test]
    fn clamp_bounds_slider_overshoot_on_both_ends() {
        let spec = spec(1.0, 5.0, 3.0);
        assert_eq!(spec.clamp(-2.0), 1.0);
        assert_eq!(spec.clamp(9.5), 5.0);
        assert_eq!(spec.clamp(4.2), 4.2);
    }

    #[test]
    fn degenerate_spec_clamps_everything_to_the_single_value() {
        let spec = spec(2.0, 2.0, 2.0);
        assert_eq!(spec.clamp(0.0), 2.0);
        assert_eq!(spec.clamp(7.0), 2.0);
        assert!(spec.validate(DishId(1)).is_ok());
    }

    #[test]
    fn validate_rejects_default_outside_bounds() {
        let err = spec(1.0, 5.0, 6.0).validate(DishId(7)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidAttributeBounds {
                dish_id: DishId(7),
                ..
            }
        ));
    }

    #[test]
    fn dish_validate_rejects_duplicate_category_and_negative_price() {
        let mut dish = DishSchema {
            id: DishId(9),
            name: "Test".into(),
            description: String::new(),
            price: 10.0,
            image_key: "test".into(),
            attributes: vec![spec(1.0, 5.0, 3.0), spec(1.0, 5.0, 2.0)],
        };
        assert!(matches!(
            dish.validate().unwrap_err(),
            CatalogError::DuplicateAttribute { .. }
        ));

        dish.attributes.pop();
        dish.price = -1.0;
        assert!(matches!(
            dish.validate().unwrap_err(),
            CatalogError::NegativePrice { .. }
        ));
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttributeCategory::SpiceLevel).unwrap(),
            "\"spice_level\""
        );
        assert_eq!(
            serde_json::to_string(&AttributeCategory::PortionSize).unwrap(),
            "\"portion_size\""
        );
    }
}
