//! In-Memory Storage
//!
//! A process-local backend implementing the same repository traits as the
//! PostgreSQL repositories. It enforces the same referential rules as the
//! schema: product links must point at existing categories, and a category
//! cannot be removed while products reference it.
//!
//! Selected with `storage.backend = "memory"` and used by the test suites.

mod category_repository;
mod product_repository;
mod seed;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::{Category, Direction, Page, PageRequest, Product};

pub use category_repository::InMemoryCategoryRepository;
pub use product_repository::InMemoryProductRepository;

/// Row storage guarded by a single lock.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) categories: BTreeMap<i64, Category>,
    /// Products with their categories held as id-only references.
    pub(crate) products: BTreeMap<i64, Product>,
    next_category_id: i64,
    next_product_id: i64,
}

impl Tables {
    fn next_category_id(&mut self) -> i64 {
        self.next_category_id += 1;
        self.next_category_id
    }

    fn next_product_id(&mut self) -> i64 {
        self.next_product_id += 1;
        self.next_product_id
    }

    /// Whether any product links to the category.
    fn category_in_use(&self, category_id: i64) -> bool {
        self.products
            .values()
            .any(|p| p.categories.iter().any(|c| c.id == Some(category_id)))
    }

    /// Replace id-only category references with the stored rows.
    fn resolve(&self, product: &Product) -> Product {
        let mut resolved = product.clone();
        resolved.categories = product
            .categories
            .iter()
            .filter_map(|c| c.id)
            .filter_map(|id| self.categories.get(&id).cloned())
            .collect();
        resolved.categories.sort_by_key(|c| c.id);
        resolved
    }
}

/// Shared in-memory database.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// An empty store. Ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the same rows as the seed migration.
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::load(&mut store.tables.write());
        store
    }

    pub(crate) fn tables(&self) -> &RwLock<Tables> {
        &self.tables
    }
}

/// Sort `items` by the requested property (id when absent or unknown) and
/// cut out the requested page.
pub(crate) fn paginate<T, F>(mut items: Vec<T>, request: &PageRequest, compare: F) -> Page<T>
where
    F: Fn(&T, &T, &str) -> Ordering,
{
    let total = items.len() as u64;

    let (property, direction) = match &request.sort {
        Some(sort) => (sort.property.as_str(), sort.direction),
        None => ("id", Direction::Asc),
    };

    items.sort_by(|a, b| {
        let primary = compare(a, b, property);
        let primary = match direction {
            Direction::Asc => primary,
            Direction::Desc => primary.reverse(),
        };
        primary.then_with(|| compare(a, b, "id"))
    });

    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
    let content = items.into_iter().skip(offset).take(limit).collect();

    Page::new(content, request, total)
}
