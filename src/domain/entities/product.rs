//! Product entity and repository trait.
//!
//! Maps to the `product` table and its `product_category` join table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::domain::value_objects::{Page, PageRequest};
use crate::shared::error::AppError;

/// Represents a catalog product.
///
/// Maps to the `product` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL
/// - description: TEXT NOT NULL
/// - price: DOUBLE PRECISION NOT NULL CHECK (price >= 0)
/// - img_url: TEXT NOT NULL
/// - date: TIMESTAMPTZ NULL
///
/// Category membership lives in `product_category (product_id, category_id)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Storage-assigned identifier, `None` until first saved
    pub id: Option<i64>,

    pub name: String,

    pub description: String,

    /// Non-negative amount
    pub price: f64,

    pub img_url: String,

    pub date: Option<DateTime<Utc>>,

    /// Associated categories, unique by id. Mutate through
    /// [`Product::add_category`] and [`Product::clear_categories`].
    pub categories: Vec<Category>,
}

impl Product {
    /// Fields a listing may be sorted by.
    pub const SORTABLE_FIELDS: &'static [&'static str] = &["id", "name", "price", "date"];

    /// An id-only placeholder for a row assumed to exist.
    pub fn reference(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Add a category unless one with the same id is already present.
    ///
    /// Returns `false` for duplicates.
    pub fn add_category(&mut self, category: Category) -> bool {
        if self
            .categories
            .iter()
            .any(|c| c.id.is_some() && c.id == category.id)
        {
            return false;
        }
        self.categories.push(category);
        true
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    /// Ids of the associated categories.
    pub fn category_ids(&self) -> Vec<i64> {
        self.categories.iter().filter_map(|c| c.id).collect()
    }
}

/// Repository trait for Product data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch one page of products with their categories resolved.
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Product>, AppError>;

    /// Find a product by its ID, with its categories resolved.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Insert a new product or update an existing one, replacing its
    /// category associations with exactly `product.categories`.
    ///
    /// Fails with `AppError::NotFound` when updating an id that has no row and
    /// with `AppError::IntegrityViolation` when a category reference is
    /// dangling.
    async fn save(&self, product: &Product) -> Result<Product, AppError>;

    /// Id-only handle to a product, without touching storage.
    fn get_reference(&self, id: i64) -> Product;

    /// Delete a product and its category associations.
    async fn delete(&self, product: &Product) -> Result<(), AppError>;

    /// Total number of products.
    async fn count(&self) -> Result<i64, AppError>;
}
