//! Category DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Category;

/// Category as exchanged over the API.
///
/// Used both as request body (`{name}`, any `id` is ignored) and as the
/// embedded `{id, name}` pairs inside a product. `name` defaults to empty so
/// that product bodies can reference categories by id alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

impl CategoryDto {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Body for a category reference inside a product request.
    pub fn reference(id: i64) -> Self {
        Self {
            id: Some(id),
            name: String::new(),
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}
