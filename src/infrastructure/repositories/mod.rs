//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! - **PgCategoryRepository** - Category rows
//! - **PgProductRepository** - Product rows and their `product_category` links
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use catalog_server::infrastructure::repositories::{
//!     PgCategoryRepository, PgProductRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let category_repo = PgCategoryRepository::new(pool.clone());
//!     let product_repo = PgProductRepository::new(pool);
//! }
//! ```

pub mod category_repository;
pub mod product_repository;

pub use category_repository::PgCategoryRepository;
pub use product_repository::PgProductRepository;

use crate::domain::Sort;

/// Build an `ORDER BY` body from a sort restricted to `allowed` columns.
///
/// Unknown properties fall back to id order; `id` is always appended as a
/// tie-breaker so page boundaries are stable.
pub(crate) fn order_by_clause(sort: Option<&Sort>, allowed: &[&str]) -> String {
    match sort {
        Some(sort) if sort.property != "id" && allowed.contains(&sort.property.as_str()) => {
            format!("{} {}, id ASC", sort.property, sort.direction.as_sql())
        }
        Some(sort) if sort.property == "id" => format!("id {}", sort.direction.as_sql()),
        _ => "id ASC".to_string(),
    }
}
