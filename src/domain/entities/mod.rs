//! # Domain Entities
//!
//! Core domain entities representing the catalog.
//! All entities map directly to their corresponding database tables.
//!
//! - **Category**: A label products can be filed under
//! - **Product**: A sellable item, linked to any number of categories
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod category;
mod product;

pub use category::{Category, CategoryRepository};
pub use product::{Product, ProductRepository};

#[cfg(test)]
pub use category::MockCategoryRepository;
#[cfg(test)]
pub use product::MockProductRepository;
