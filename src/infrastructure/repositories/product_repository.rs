//! Product Repository Implementation
//!
//! PostgreSQL implementation of the ProductRepository trait.
//! Category membership is stored in the `product_category` join table and
//! rewritten as a whole on every save.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Category, Page, PageRequest, Product, ProductRepository};
use crate::shared::error::AppError;

use super::order_by_clause;

/// Database row representation matching the product table schema.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    img_url: String,
    date: Option<DateTime<Utc>>,
}

impl ProductRow {
    /// Convert database row to domain Product entity.
    fn into_product(self, categories: Vec<Category>) -> Product {
        Product {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            date: self.date,
            categories,
        }
    }
}

/// A category joined through product_category.
#[derive(Debug, sqlx::FromRow)]
struct ProductCategoryRow {
    product_id: i64,
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// PostgreSQL product repository implementation.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PgProductRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the categories of several products at once, keyed by product id.
    async fn load_categories(
        &self,
        product_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Category>>, AppError> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ProductCategoryRow>(
            r#"
            SELECT pc.product_id, c.id, c.name, c.created_at, c.updated_at
            FROM product_category pc
            INNER JOIN category c ON c.id = pc.category_id
            WHERE pc.product_id = ANY($1)
            ORDER BY c.id
            "#,
        )
        .bind(product_ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        let mut by_product: HashMap<i64, Vec<Category>> = HashMap::new();
        for row in rows {
            by_product.entry(row.product_id).or_default().push(Category {
                id: Some(row.id),
                name: row.name,
                created_at: Some(row.created_at),
                updated_at: Some(row.updated_at),
            });
        }

        Ok(by_product)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    /// Fetch one page of products with their categories.
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Product>, AppError> {
        let order_by = order_by_clause(request.sort.as_ref(), Product::SORTABLE_FIELDS);

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT id, name, description, price, img_url, date
            FROM product
            ORDER BY {order_by}
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(request.limit() as i64)
        .bind(request.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut categories = self.load_categories(&ids).await?;
        let total = self.count().await?;

        let content = rows
            .into_iter()
            .map(|r| {
                let cats = categories.remove(&r.id).unwrap_or_default();
                r.into_product(cats)
            })
            .collect();

        Ok(Page::new(content, request, total.max(0) as u64))
    }

    /// Find a product by its ID, with categories.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, img_url, date
            FROM product
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let categories = self
            .load_categories(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(row.into_product(categories)))
    }

    /// Insert or update a product and rewrite its category links in one transaction.
    async fn save(&self, product: &Product) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = match product.id {
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO product (name, description, price, img_url, date)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(&product.img_url)
                .bind(product.date)
                .fetch_one(&mut *tx)
                .await?
            }
            Some(id) => sqlx::query_scalar::<_, i64>(
                r#"
                UPDATE product
                SET name = $2,
                    description = $3,
                    price = $4,
                    img_url = $5,
                    date = $6
                WHERE id = $1
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.img_url)
            .bind(product.date)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?,
        };

        sqlx::query("DELETE FROM product_category WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for category_id in product.category_ids() {
            sqlx::query(
                r#"
                INSERT INTO product_category (product_id, category_id)
                VALUES ($1, $2)
                ON CONFLICT (product_id, category_id) DO NOTHING
                "#,
            )
            .bind(id)
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::IntegrityViolation(format!(
                        "Category {} does not exist",
                        category_id
                    ))
                }
                _ => AppError::Database(e),
            })?;
        }

        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Product {} vanished after save", id)))
    }

    fn get_reference(&self, id: i64) -> Product {
        Product::reference(id)
    }

    /// Delete a product together with its category links.
    async fn delete(&self, product: &Product) -> Result<(), AppError> {
        let Some(id) = product.id else {
            return Err(AppError::NotFound("Product has no id".to_string()));
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM product_category WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::IntegrityViolation(format!("Product {} is still referenced", id))
                }
                _ => AppError::Database(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product with id {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
