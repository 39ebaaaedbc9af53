//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CategoryService**: Category CRUD and paged listing
//! - **ProductService**: Product CRUD, paged listing and category set synchronization

pub mod category_service;
pub mod product_service;

// Re-export category service types
pub use category_service::{CategoryError, CategoryService, CategoryServiceImpl};

// Re-export product service types
pub use product_service::{ProductError, ProductService, ProductServiceImpl};
