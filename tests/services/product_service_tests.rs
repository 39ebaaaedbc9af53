//! ProductService against the seeded in-memory store

use std::sync::Arc;

use pretty_assertions::assert_eq;

use catalog_server::application::dto::{CategoryDto, ProductDto};
use catalog_server::application::services::{ProductError, ProductService, ProductServiceImpl};
use catalog_server::domain::{PageRequest, ProductRepository, Sort};
use catalog_server::infrastructure::memory::{
    InMemoryCategoryRepository, InMemoryProductRepository, InMemoryStore,
};

const EXISTING_ID: i64 = 1;
const NON_EXISTING_ID: i64 = 1000;
const TOTAL_PRODUCTS: i64 = 25;

type Service = ProductServiceImpl<InMemoryProductRepository, InMemoryCategoryRepository>;

fn setup() -> (Service, Arc<InMemoryProductRepository>) {
    let store = Arc::new(InMemoryStore::seeded());
    let products = Arc::new(InMemoryProductRepository::new(store.clone()));
    let categories = Arc::new(InMemoryCategoryRepository::new(store));
    (ProductServiceImpl::new(products.clone(), categories), products)
}

fn dto(name: &str, category_ids: &[i64]) -> ProductDto {
    ProductDto {
        name: name.to_string(),
        description: "Good phone".to_string(),
        price: 800.0,
        img_url: "https://img.example.com/phone.jpg".to_string(),
        categories: category_ids.iter().copied().map(CategoryDto::reference).collect(),
        ..ProductDto::default()
    }
}

fn category_ids(product: &ProductDto) -> Vec<i64> {
    product.categories.iter().filter_map(|c| c.id).collect()
}

#[tokio::test]
async fn list_paged_returns_first_page() {
    let (service, _) = setup();

    let page = service.list_paged(PageRequest::of(0, 10)).await.unwrap();

    assert!(page.has_content());
    assert_eq!(page.number_of_elements(), 10);
    assert_eq!(page.total_elements, TOTAL_PRODUCTS as u64);
    assert_eq!(page.total_pages(), 3);
}

#[tokio::test]
async fn list_paged_past_end_is_empty() {
    let (service, _) = setup();

    let page = service.list_paged(PageRequest::of(50, 10)).await.unwrap();

    assert!(!page.has_content());
}

#[tokio::test]
async fn list_paged_sorted_by_name() {
    let (service, _) = setup();

    let page = service
        .list_paged(PageRequest::of(0, 10).sorted(Sort::asc("name")))
        .await
        .unwrap();

    assert_eq!(page.content[0].name, "Macbook Pro");
    assert_eq!(page.content[1].name, "PC Gamer");
    assert_eq!(page.content[2].name, "PC Gamer Alfa");
}

#[tokio::test]
async fn get_by_id_returns_requested_id() {
    let (service, _) = setup();

    let product = service.get_by_id(EXISTING_ID).await.unwrap();

    assert_eq!(product.id, Some(EXISTING_ID));
    assert_eq!(product.name, "The Lord of the Rings");
    assert_eq!(category_ids(&product), vec![1]);
}

#[tokio::test]
async fn update_replaces_category_set_exactly() {
    let (service, _) = setup();
    let created = service.create(dto("Phone", &[1])).await.unwrap();
    let id = created.id.unwrap();
    assert_eq!(category_ids(&created), vec![1]);

    let updated = service.update(id, dto("Phone", &[2])).await.unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(category_ids(&updated), vec![2]);
    assert_eq!(category_ids(&service.get_by_id(id).await.unwrap()), vec![2]);
}

#[tokio::test]
async fn duplicate_category_ids_are_collapsed() {
    let (service, _) = setup();

    let created = service.create(dto("Phone", &[3, 3, 2])).await.unwrap();

    assert_eq!(category_ids(&created), vec![2, 3]);
}

#[tokio::test]
async fn unknown_category_fails_without_writing() {
    let (service, repo) = setup();

    let result = service.create(dto("Phone", &[1, 77])).await;

    assert!(matches!(result, Err(ProductError::CategoryNotFound(77))));
    assert_eq!(repo.count().await.unwrap(), TOTAL_PRODUCTS);
}

#[tokio::test]
async fn operations_on_missing_id_are_not_found() {
    let (service, _) = setup();

    assert!(matches!(
        service.get_by_id(NON_EXISTING_ID).await,
        Err(ProductError::NotFound(NON_EXISTING_ID))
    ));
    assert!(matches!(
        service.update(NON_EXISTING_ID, dto("Ghost", &[])).await,
        Err(ProductError::NotFound(NON_EXISTING_ID))
    ));
    assert!(matches!(
        service.delete(NON_EXISTING_ID).await,
        Err(ProductError::NotFound(NON_EXISTING_ID))
    ));
}

#[tokio::test]
async fn delete_removes_row_and_drops_count() {
    let (service, repo) = setup();

    service.delete(EXISTING_ID).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), TOTAL_PRODUCTS - 1);
    assert!(matches!(
        service.get_by_id(EXISTING_ID).await,
        Err(ProductError::NotFound(EXISTING_ID))
    ));
}
