//! CategoryService against the seeded in-memory store

use std::sync::Arc;

use pretty_assertions::assert_eq;

use catalog_server::application::dto::CategoryDto;
use catalog_server::application::services::{CategoryError, CategoryService, CategoryServiceImpl};
use catalog_server::domain::{CategoryRepository, PageRequest, Sort};
use catalog_server::infrastructure::memory::{InMemoryCategoryRepository, InMemoryStore};

const EXISTING_ID: i64 = 1;
const NON_EXISTING_ID: i64 = 1000;
const DEPENDENT_ID: i64 = 3;
const TOTAL_CATEGORIES: i64 = 3;

fn setup() -> (CategoryServiceImpl<InMemoryCategoryRepository>, Arc<InMemoryCategoryRepository>) {
    let store = Arc::new(InMemoryStore::seeded());
    let repo = Arc::new(InMemoryCategoryRepository::new(store));
    (CategoryServiceImpl::new(repo.clone()), repo)
}

#[tokio::test]
async fn list_paged_returns_page() {
    let (service, _) = setup();

    let page = service.list_paged(PageRequest::of(0, 10)).await.unwrap();

    assert!(page.has_content());
    assert_eq!(page.total_elements, TOTAL_CATEGORIES as u64);
    assert_eq!(page.total_pages(), 1);
}

#[tokio::test]
async fn list_paged_sorted_by_name() {
    let (service, _) = setup();

    let page = service
        .list_paged(PageRequest::of(0, 10).sorted(Sort::asc("name")))
        .await
        .unwrap();

    let names: Vec<String> = page.content.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Books", "Computers", "Eletronics"]);
}

#[tokio::test]
async fn create_then_find_returns_fresh_id() {
    let (service, repo) = setup();

    let created = service
        .create(CategoryDto {
            id: None,
            name: "Books".to_string(),
        })
        .await
        .unwrap();

    let id = created.id.unwrap();
    assert!(id > TOTAL_CATEGORIES);
    assert_eq!(service.get_by_id(id).await.unwrap().name, "Books");
    assert_eq!(repo.count().await.unwrap(), TOTAL_CATEGORIES + 1);
}

#[tokio::test]
async fn update_keeps_id() {
    let (service, _) = setup();

    let updated = service
        .update(EXISTING_ID, CategoryDto::new(42, "Novels"))
        .await
        .unwrap();

    assert_eq!(updated.id, Some(EXISTING_ID));
    assert_eq!(updated.name, "Novels");
}

#[tokio::test]
async fn operations_on_missing_id_are_not_found() {
    let (service, _) = setup();

    assert!(matches!(
        service.get_by_id(NON_EXISTING_ID).await,
        Err(CategoryError::NotFound(NON_EXISTING_ID))
    ));
    assert!(matches!(
        service
            .update(NON_EXISTING_ID, CategoryDto::reference(NON_EXISTING_ID))
            .await,
        Err(CategoryError::NotFound(NON_EXISTING_ID))
    ));
    assert!(matches!(
        service.delete(NON_EXISTING_ID).await,
        Err(CategoryError::NotFound(NON_EXISTING_ID))
    ));
}

#[tokio::test]
async fn delete_with_dependents_is_integrity_violation() {
    let (service, repo) = setup();

    let result = service.delete(DEPENDENT_ID).await;

    assert!(matches!(result, Err(CategoryError::IntegrityViolation)));
    assert_eq!(repo.count().await.unwrap(), TOTAL_CATEGORIES);
}

#[tokio::test]
async fn delete_without_dependents_removes_row() {
    let (service, repo) = setup();
    let created = service
        .create(CategoryDto {
            id: None,
            name: "Garden".to_string(),
        })
        .await
        .unwrap();
    let id = created.id.unwrap();

    service.delete(id).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), TOTAL_CATEGORIES);
    assert!(matches!(
        service.get_by_id(id).await,
        Err(CategoryError::NotFound(_))
    ));
}
