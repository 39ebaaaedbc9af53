use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;

use super::{paginate, InMemoryStore};
use crate::domain::{Category, Page, PageRequest, Product, ProductRepository};
use crate::shared::error::AppError;

/// Product repository over an [`InMemoryStore`].
#[derive(Clone)]
pub struct InMemoryProductRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryProductRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn compare_products(a: &Product, b: &Product, property: &str) -> Ordering {
    match property {
        "name" => a.name.cmp(&b.name),
        "price" => a.price.total_cmp(&b.price),
        "date" => a.date.cmp(&b.date),
        _ => a.id.cmp(&b.id),
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Product>, AppError> {
        let tables = self.store.tables().read();
        let rows: Vec<Product> = tables.products.values().cloned().collect();

        Ok(paginate(rows, request, compare_products).map(|p| tables.resolve(&p)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let tables = self.store.tables().read();
        Ok(tables.products.get(&id).map(|p| tables.resolve(p)))
    }

    async fn save(&self, product: &Product) -> Result<Product, AppError> {
        let mut tables = self.store.tables().write();

        if let Some(missing) = product
            .category_ids()
            .into_iter()
            .find(|id| !tables.categories.contains_key(id))
        {
            return Err(AppError::IntegrityViolation(format!(
                "Category {} does not exist",
                missing
            )));
        }

        let id = match product.id {
            None => tables.next_product_id(),
            Some(id) if tables.products.contains_key(&id) => id,
            Some(id) => {
                return Err(AppError::NotFound(format!("Product with id {} not found", id)));
            }
        };

        let mut stored = product.clone();
        stored.id = Some(id);
        stored.clear_categories();
        for category_id in product.category_ids() {
            stored.add_category(Category::reference(category_id));
        }

        let resolved = tables.resolve(&stored);
        tables.products.insert(id, stored);

        Ok(resolved)
    }

    fn get_reference(&self, id: i64) -> Product {
        Product::reference(id)
    }

    async fn delete(&self, product: &Product) -> Result<(), AppError> {
        let Some(id) = product.id else {
            return Err(AppError::NotFound("Product has no id".to_string()));
        };

        self.store
            .tables()
            .write()
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.tables().read().products.len() as i64)
    }
}
