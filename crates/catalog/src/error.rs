use thiserror::Error;

use crate::domain::{AttributeCategory, DishId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error(
        "dish {dish_id:?} attribute {category:?} violates min <= default <= max \
         (min={min}, max={max}, default={default})"
    )]
    InvalidAttributeBounds {
        dish_id: DishId,
        category: AttributeCategory,
        min: f32,
        max: f32,
        default: f32,
    },
    #[error("dish {dish_id:?} has negative price {price}")]
    NegativePrice { dish_id: DishId, price: f64 },
    #[error("dish {dish_id:?} declares attribute {category:?} more than once")]
    DuplicateAttribute {
        dish_id: DishId,
        category: AttributeCategory,
    },
}
