pub mod domain;
pub mod error;
pub mod sample;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::DishSchema;

/// Read-only source of dish definitions. The core only depends on the shape
/// of the schemas, not on where they come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_dishes(&self) -> Result<Vec<DishSchema>>;
}

/// The built-in demo catalog.
pub struct SampleCatalog;

#[async_trait]
impl CatalogSource for SampleCatalog {
    async fn load_dishes(&self) -> Result<Vec<DishSchema>> {
        let dishes = sample::sample_dishes();
        for dish in &dishes {
            dish.validate()?;
        }
        Ok(dishes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_catalog_loads_validated_dishes() {
        let dishes = SampleCatalog.load_dishes().await.expect("sample catalog");
        assert_eq!(dishes.len(), 4);
    }
}
