use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::{paginate, InMemoryStore};
use crate::domain::{Category, CategoryRepository, Page, PageRequest};
use crate::shared::error::AppError;

/// Category repository over an [`InMemoryStore`].
#[derive(Clone)]
pub struct InMemoryCategoryRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Category>, AppError> {
        let rows: Vec<Category> = self
            .store
            .tables()
            .read()
            .categories
            .values()
            .cloned()
            .collect();

        Ok(paginate(rows, request, |a, b, property| match property {
            "name" => a.name.cmp(&b.name),
            _ => a.id.cmp(&b.id),
        }))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        Ok(self.store.tables().read().categories.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.store.tables().read().categories.contains_key(&id))
    }

    async fn save(&self, category: &Category) -> Result<Category, AppError> {
        let mut tables = self.store.tables().write();
        let now = Utc::now();

        let saved = match category.id {
            None => {
                let id = tables.next_category_id();
                Category {
                    id: Some(id),
                    name: category.name.clone(),
                    created_at: Some(now),
                    updated_at: Some(now),
                }
            }
            Some(id) => {
                let existing = tables.categories.get(&id).ok_or_else(|| {
                    AppError::NotFound(format!("Category with id {} not found", id))
                })?;
                Category {
                    id: Some(id),
                    name: category.name.clone(),
                    created_at: existing.created_at,
                    updated_at: Some(now),
                }
            }
        };

        if let Some(id) = saved.id {
            tables.categories.insert(id, saved.clone());
        }

        Ok(saved)
    }

    fn get_reference(&self, id: i64) -> Category {
        Category::reference(id)
    }

    async fn delete(&self, category: &Category) -> Result<(), AppError> {
        let Some(id) = category.id else {
            return Err(AppError::NotFound("Category has no id".to_string()));
        };

        let mut tables = self.store.tables().write();

        if !tables.categories.contains_key(&id) {
            return Err(AppError::NotFound(format!("Category with id {} not found", id)));
        }
        if tables.category_in_use(id) {
            return Err(AppError::IntegrityViolation(format!(
                "Category {} is referenced by products",
                id
            )));
        }

        tables.categories.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.tables().read().categories.len() as i64)
    }
}
