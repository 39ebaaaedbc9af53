//! # Domain Layer
//!
//! The domain layer contains the core entities of the catalog.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Category and Product, plus their repository traits
//! - **value_objects**: Paging and sorting types
//!
//! Repository traits define the data access contract; the infrastructure
//! layer provides PostgreSQL and in-memory implementations.

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
