//! Product DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::category::CategoryDto;
use crate::domain::Product;

/// Product as exchanged over the API.
///
/// `categories` holds `{id, name}` pairs on output; on input only the ids
/// are read, and every entry must carry one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[serde(default)]
    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub img_url: String,

    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(custom(function = "validate_category_refs"))]
    pub categories: Vec<CategoryDto>,
}

fn validate_category_refs(categories: &[CategoryDto]) -> Result<(), ValidationError> {
    if categories.iter().all(|c| c.id.is_some()) {
        return Ok(());
    }
    Err(ValidationError::new("category_id_required")
        .with_message("Every category must have an id".into()))
}

impl ProductDto {
    /// Distinct category ids referenced by this DTO, in request order.
    pub fn category_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = Vec::with_capacity(self.categories.len());
        for id in self.categories.iter().filter_map(|c| c.id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            img_url: product.img_url,
            date: product.date,
            categories: product.categories.into_iter().map(CategoryDto::from).collect(),
        }
    }
}
