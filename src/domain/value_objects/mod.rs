//! Value Objects
//!
//! Immutable value types shared by the domain and its repositories.

pub mod page;

pub use page::{Direction, Page, PageRequest, ParseSortError, Sort};
