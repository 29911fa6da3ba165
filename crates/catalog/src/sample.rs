//! Fixed demo catalog. Mirrors the legacy sample data exactly: four dishes,
//! each with a subset of the customizable attributes.

use crate::domain::{AttributeCategory, AttributeSpec, DishId, DishSchema};

pub fn sample_dishes() -> Vec<DishSchema> {
    vec![
        DishSchema {
            id: DishId(1),
            name: "Chicken Biryani".into(),
            description: "Aromatic basmati rice with tender chicken".into(),
            price: 299.0,
            image_key: "biryani".into(),
            attributes: vec![
                AttributeSpec::new(AttributeCategory::SpiceLevel, 1.0, 5.0, 3.0),
                AttributeSpec::new(AttributeCategory::PortionSize, 1.0, 10.0, 5.0),
                AttributeSpec::new(AttributeCategory::Saltiness, 1.0, 5.0, 3.0),
            ],
        },
        DishSchema {
            id: DishId(2),
            name: "Chocolate Cake".into(),
            description: "Rich chocolate cake with cream frosting".into(),
            price: 199.0,
            image_key: "cake".into(),
            attributes: vec![
                AttributeSpec::new(AttributeCategory::Sweetness, 1.0, 5.0, 3.0),
                AttributeSpec::new(AttributeCategory::PortionSize, 1.0, 10.0, 5.0),
            ],
        },
        DishSchema {
            id: DishId(3),
            name: "Masala Dosa".into(),
            description: "Crispy dosa with spiced potato filling".into(),
            price: 89.0,
            image_key: "dosa".into(),
            attributes: vec![
                AttributeSpec::new(AttributeCategory::SpiceLevel, 1.0, 5.0, 2.0),
                AttributeSpec::new(AttributeCategory::PortionSize, 1.0, 10.0, 5.0),
            ],
        },
        DishSchema {
            id: DishId(4),
            name: "Pasta Arrabiata".into(),
            description: "Spicy tomato pasta with herbs".into(),
            price: 249.0,
            image_key: "pasta".into(),
            attributes: vec![
                AttributeSpec::new(AttributeCategory::SpiceLevel, 1.0, 5.0, 3.0),
                AttributeSpec::new(AttributeCategory::PortionSize, 1.0, 10.0, 5.0),
                AttributeSpec::new(AttributeCategory::Saltiness, 1.0, 5.0, 3.0),
            ],
        },
    ]
}
