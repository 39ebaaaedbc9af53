//! Product Service
//!
//! CRUD and paged listing for products, including synchronization of each
//! product's category set.
//!
//! On create and update the category set is rebuilt from the ids in the
//! request: the existing set is cleared and one reference per id is added.
//! Ids left out of the request are dropped from the product. Every id is
//! checked against the category repository before anything is written.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::application::dto::ProductDto;
use crate::domain::{CategoryRepository, Page, PageRequest, Product, ProductRepository};
use crate::shared::error::AppError;

/// Product service trait defining all product operations.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List one page of products with their categories.
    async fn list_paged(&self, request: PageRequest) -> Result<Page<ProductDto>, ProductError>;

    /// Get a product by its ID.
    async fn get_by_id(&self, id: i64) -> Result<ProductDto, ProductError>;

    /// Create a product and link it to the requested categories.
    async fn create(&self, dto: ProductDto) -> Result<ProductDto, ProductError>;

    /// Overwrite a product's fields and replace its category set.
    async fn update(&self, id: i64, dto: ProductDto) -> Result<ProductDto, ProductError>;

    /// Delete a product.
    async fn delete(&self, id: i64) -> Result<(), ProductError>;
}

// =============================================================================
// Error Types
// =============================================================================

/// Product service errors.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(i64),

    #[error("Category with id {0} not found")]
    CategoryNotFound(i64),

    #[error("Integrity violation")]
    IntegrityViolation,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::CategoryNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            ProductError::IntegrityViolation => AppError::IntegrityViolation(err.to_string()),
            ProductError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

// =============================================================================
// Service Implementation
// =============================================================================

/// ProductService implementation over product and category repositories.
pub struct ProductServiceImpl<P, C>
where
    P: ProductRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    product_repo: Arc<P>,
    category_repo: Arc<C>,
}

impl<P, C> ProductServiceImpl<P, C>
where
    P: ProductRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    /// Create a new ProductServiceImpl.
    pub fn new(product_repo: Arc<P>, category_repo: Arc<C>) -> Self {
        Self {
            product_repo,
            category_repo,
        }
    }

    /// Copy the DTO onto `product`, replacing its whole category set.
    async fn copy_dto_to_entity(
        &self,
        dto: ProductDto,
        product: &mut Product,
    ) -> Result<(), ProductError> {
        let category_ids = dto.category_ids();

        product.name = dto.name;
        product.description = dto.description;
        product.date = dto.date;
        product.img_url = dto.img_url;
        product.price = dto.price;

        product.clear_categories();
        for id in category_ids {
            let exists = self
                .category_repo
                .exists_by_id(id)
                .await
                .map_err(|e| ProductError::Internal(e.to_string()))?;
            if !exists {
                return Err(ProductError::CategoryNotFound(id));
            }
            product.add_category(self.category_repo.get_reference(id));
        }

        Ok(())
    }
}

/// Translate a repository failure from `save`.
///
/// A missing row only makes sense for updates. An integrity violation means a
/// category vanished between validation and the write.
fn save_error(product_id: Option<i64>, err: AppError) -> ProductError {
    match (err, product_id) {
        (AppError::NotFound(_), Some(id)) => ProductError::NotFound(id),
        (AppError::IntegrityViolation(detail), _) => {
            tracing::warn!(?product_id, %detail, "Category reference vanished during save");
            ProductError::IntegrityViolation
        }
        (e, _) => ProductError::Internal(e.to_string()),
    }
}

#[async_trait]
impl<P, C> ProductService for ProductServiceImpl<P, C>
where
    P: ProductRepository + ?Sized + 'static,
    C: CategoryRepository + ?Sized + 'static,
{
    async fn list_paged(&self, request: PageRequest) -> Result<Page<ProductDto>, ProductError> {
        let page = self
            .product_repo
            .find_all(&request)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;

        Ok(page.map(ProductDto::from))
    }

    async fn get_by_id(&self, id: i64) -> Result<ProductDto, ProductError> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?
            .ok_or(ProductError::NotFound(id))?;

        Ok(ProductDto::from(product))
    }

    #[instrument(skip(self, dto), fields(name = %dto.name))]
    async fn create(&self, dto: ProductDto) -> Result<ProductDto, ProductError> {
        let mut product = Product::default();
        self.copy_dto_to_entity(dto, &mut product).await?;

        let saved = self
            .product_repo
            .save(&product)
            .await
            .map_err(|e| save_error(None, e))?;

        tracing::info!(id = ?saved.id, categories = ?saved.category_ids(), "Product created");
        Ok(ProductDto::from(saved))
    }

    #[instrument(skip(self, dto))]
    async fn update(&self, id: i64, dto: ProductDto) -> Result<ProductDto, ProductError> {
        let mut product = self.product_repo.get_reference(id);
        self.copy_dto_to_entity(dto, &mut product).await?;

        let saved = self
            .product_repo
            .save(&product)
            .await
            .map_err(|e| save_error(Some(id), e))?;

        tracing::info!(id, categories = ?saved.category_ids(), "Product updated");
        Ok(ProductDto::from(saved))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ProductError> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?
            .ok_or(ProductError::NotFound(id))?;

        self.product_repo
            .delete(&product)
            .await
            .map_err(|e| match e {
                AppError::IntegrityViolation(detail) => {
                    tracing::warn!(id, %detail, "Product still referenced");
                    ProductError::IntegrityViolation
                }
                e => ProductError::Internal(e.to_string()),
            })?;

        tracing::info!(id, "Product deleted");
        Ok(())
    }
}
