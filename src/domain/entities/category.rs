//! Category entity and repository trait.
//!
//! Maps to the `category` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Page, PageRequest};
use crate::shared::error::AppError;

/// Represents a product category.
///
/// Maps to the `category` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Storage-assigned identifier, `None` until first saved
    pub id: Option<i64>,

    /// Category label
    pub name: String,

    /// Set by the repository on insert
    pub created_at: Option<DateTime<Utc>>,

    /// Set by the repository on every save
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Fields a listing may be sorted by.
    pub const SORTABLE_FIELDS: &'static [&'static str] = &["id", "name"];

    /// A transient category that has never been saved.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// An id-only placeholder for a row assumed to exist.
    ///
    /// Nothing is read from storage; a dangling id is only detected when the
    /// placeholder (or an entity holding it) is saved.
    pub fn reference(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// Repository trait for Category data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch one page of categories.
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Category>, AppError>;

    /// Find a category by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Check whether a category row exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Insert a new category or update an existing one.
    ///
    /// Fails with `AppError::NotFound` when updating an id that has no row.
    async fn save(&self, category: &Category) -> Result<Category, AppError>;

    /// Id-only handle to a category, without touching storage.
    fn get_reference(&self, id: i64) -> Category;

    /// Delete a category.
    ///
    /// Fails with `AppError::IntegrityViolation` while products reference it.
    async fn delete(&self, category: &Category) -> Result<(), AppError>;

    /// Total number of categories.
    async fn count(&self) -> Result<i64, AppError>;
}
