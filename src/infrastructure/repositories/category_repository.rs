//! Category Repository Implementation
//!
//! PostgreSQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Category, CategoryRepository, Page, PageRequest};
use crate::shared::error::AppError;

use super::order_by_clause;

/// Database row representation matching the category table schema.
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    /// Convert database row to domain Category entity.
    fn into_category(self) -> Category {
        Category {
            id: Some(self.id),
            name: self.name,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}

/// PostgreSQL category repository implementation.
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, category: &Category) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO category (name, created_at, updated_at)
            VALUES ($1, NOW(), NOW())
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_category())
    }

    async fn update(&self, id: i64, category: &Category) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE category
            SET name = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&category.name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        Ok(row.into_category())
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    /// Fetch one page of categories.
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Category>, AppError> {
        let order_by = order_by_clause(request.sort.as_ref(), Category::SORTABLE_FIELDS);

        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            r#"
            SELECT id, name, created_at, updated_at
            FROM category
            ORDER BY {order_by}
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(request.limit() as i64)
        .bind(request.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let total = self.count().await?;

        Ok(Page::new(
            rows.into_iter().map(|r| r.into_category()).collect(),
            request,
            total.max(0) as u64,
        ))
    }

    /// Find a category by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM category
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_category()))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM category WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Insert or update a category.
    async fn save(&self, category: &Category) -> Result<Category, AppError> {
        match category.id {
            None => self.insert(category).await,
            Some(id) => self.update(id, category).await,
        }
    }

    fn get_reference(&self, id: i64) -> Category {
        Category::reference(id)
    }

    /// Delete a category.
    /// Blocked by the product_category foreign key while products reference it.
    async fn delete(&self, category: &Category) -> Result<(), AppError> {
        let Some(id) = category.id else {
            return Err(AppError::NotFound("Category has no id".to_string()));
        };

        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::IntegrityViolation(format!(
                        "Category {} is referenced by products",
                        id
                    ))
                }
                _ => AppError::Database(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category with id {} not found", id)));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
