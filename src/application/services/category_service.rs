//! Category Service
//!
//! CRUD and paged listing for categories.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::application::dto::CategoryDto;
use crate::domain::{Category, CategoryRepository, Page, PageRequest};
use crate::shared::error::AppError;

/// Category service trait defining all category operations.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// List one page of categories.
    async fn list_paged(&self, request: PageRequest) -> Result<Page<CategoryDto>, CategoryError>;

    /// Get a category by its ID.
    async fn get_by_id(&self, id: i64) -> Result<CategoryDto, CategoryError>;

    /// Create a category from the DTO's name.
    async fn create(&self, dto: CategoryDto) -> Result<CategoryDto, CategoryError>;

    /// Rename an existing category.
    async fn update(&self, id: i64, dto: CategoryDto) -> Result<CategoryDto, CategoryError>;

    /// Delete a category that no product references.
    async fn delete(&self, id: i64) -> Result<(), CategoryError>;
}

// =============================================================================
// Error Types
// =============================================================================

/// Category service errors.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Category with id {0} not found")]
    NotFound(i64),

    #[error("Integrity violation")]
    IntegrityViolation,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => AppError::NotFound(err.to_string()),
            CategoryError::IntegrityViolation => AppError::IntegrityViolation(err.to_string()),
            CategoryError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

// =============================================================================
// Service Implementation
// =============================================================================

/// CategoryService implementation over a category repository.
pub struct CategoryServiceImpl<R>
where
    R: CategoryRepository + ?Sized,
{
    category_repo: Arc<R>,
}

impl<R> CategoryServiceImpl<R>
where
    R: CategoryRepository + ?Sized,
{
    /// Create a new CategoryServiceImpl.
    pub fn new(category_repo: Arc<R>) -> Self {
        Self { category_repo }
    }
}

#[async_trait]
impl<R> CategoryService for CategoryServiceImpl<R>
where
    R: CategoryRepository + ?Sized + 'static,
{
    async fn list_paged(&self, request: PageRequest) -> Result<Page<CategoryDto>, CategoryError> {
        let page = self
            .category_repo
            .find_all(&request)
            .await
            .map_err(|e| CategoryError::Internal(e.to_string()))?;

        Ok(page.map(CategoryDto::from))
    }

    async fn get_by_id(&self, id: i64) -> Result<CategoryDto, CategoryError> {
        let category = self
            .category_repo
            .find_by_id(id)
            .await
            .map_err(|e| CategoryError::Internal(e.to_string()))?
            .ok_or(CategoryError::NotFound(id))?;

        Ok(CategoryDto::from(category))
    }

    #[instrument(skip(self, dto), fields(name = %dto.name))]
    async fn create(&self, dto: CategoryDto) -> Result<CategoryDto, CategoryError> {
        let category = Category::new(dto.name);

        let saved = self
            .category_repo
            .save(&category)
            .await
            .map_err(|e| CategoryError::Internal(e.to_string()))?;

        tracing::info!(id = ?saved.id, "Category created");
        Ok(CategoryDto::from(saved))
    }

    #[instrument(skip(self, dto))]
    async fn update(&self, id: i64, dto: CategoryDto) -> Result<CategoryDto, CategoryError> {
        let mut category = self.category_repo.get_reference(id);
        category.name = dto.name;

        let saved = self
            .category_repo
            .save(&category)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => CategoryError::NotFound(id),
                e => CategoryError::Internal(e.to_string()),
            })?;

        Ok(CategoryDto::from(saved))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), CategoryError> {
        let category = self
            .category_repo
            .find_by_id(id)
            .await
            .map_err(|e| CategoryError::Internal(e.to_string()))?
            .ok_or(CategoryError::NotFound(id))?;

        self.category_repo
            .delete(&category)
            .await
            .map_err(|e| match e {
                AppError::IntegrityViolation(detail) => {
                    tracing::warn!(id, %detail, "Category still referenced");
                    CategoryError::IntegrityViolation
                }
                e => CategoryError::Internal(e.to_string()),
            })?;

        tracing::info!(id, "Category deleted");
        Ok(())
    }
}
