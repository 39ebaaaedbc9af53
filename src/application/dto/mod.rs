//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod category;
pub mod page;
pub mod product;

pub use category::CategoryDto;
pub use page::PageResponse;
pub use product::ProductDto;
