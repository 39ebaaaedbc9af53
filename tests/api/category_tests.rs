//! Category API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{fake_category_name, ids, TestApp};

#[tokio::test]
async fn list_returns_sorted_page() {
    let app = TestApp::new();

    let response = app.get("/categories?page=0&size=10&sort=name").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalElements"], 3);
    assert_eq!(response.body["totalPages"], 1);
    assert_eq!(response.body["first"], true);
    assert_eq!(response.body["last"], true);
    assert_eq!(response.body["content"][0]["name"], "Books");
    assert_eq!(response.body["content"][1]["name"], "Computers");
    assert_eq!(response.body["content"][2]["name"], "Eletronics");
}

#[tokio::test]
async fn list_uses_default_page_size() {
    let app = TestApp::new();

    let response = app.get("/categories").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["size"], 12);
    assert_eq!(response.body["number"], 0);
    assert_eq!(ids(&response.body["content"]), vec![1, 2, 3]);
}

#[tokio::test]
async fn list_sorts_descending() {
    let app = TestApp::new();

    let response = app.get("/categories?sort=id,desc").await;

    assert_eq!(ids(&response.body["content"]), vec![3, 2, 1]);
}

#[test_case("/categories?sort=price" ; "unknown sort field")]
#[test_case("/categories?sort=name,sideways" ; "bad direction")]
#[test_case("/categories?size=0" ; "zero size")]
#[test_case("/categories?page=-1" ; "negative page")]
#[tokio::test]
async fn list_rejects_bad_paging(uri: &str) {
    let app = TestApp::new();

    let response = app.get(uri).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);
    assert_eq!(response.body["path"], "/categories");
}

#[tokio::test]
async fn get_returns_category_when_id_exists() {
    let app = TestApp::new();

    let response = app.get("/categories/2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 2);
    assert_eq!(response.body["name"], "Eletronics");
}

#[tokio::test]
async fn get_returns_not_found_body_when_id_does_not_exist() {
    let app = TestApp::new();

    let response = app.get("/categories/1000").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], 404);
    assert_eq!(response.body["error"], "Resource not found");
    assert_eq!(response.body["message"], "Category with id 1000 not found");
    assert_eq!(response.body["path"], "/categories/1000");
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn get_rejects_non_numeric_id() {
    let app = TestApp::new();

    let response = app.get("/categories/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid category ID");
}

#[tokio::test]
async fn create_returns_created_with_location() {
    let app = TestApp::new();
    let name = fake_category_name();

    let response = app.post_json("/categories", &json!({ "name": name })).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 4);
    assert_eq!(response.body["name"], name.as_str());
    assert_eq!(response.location.as_deref(), Some("/categories/4"));

    let fetched = app.get("/categories/4").await;
    assert_eq!(fetched.body["name"], name.as_str());
}

#[tokio::test]
async fn create_ignores_client_id() {
    let app = TestApp::new();

    let response = app
        .post_json("/categories", &json!({ "id": 1, "name": "Garden" }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 4);

    let books = app.get("/categories/1").await;
    assert_eq!(books.body["name"], "Books");
}

#[tokio::test]
async fn create_rejects_blank_name_with_field_errors() {
    let app = TestApp::new();

    let response = app.post_json("/categories", &json!({ "name": "" })).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "Validation exception");
    assert_eq!(response.body["errors"][0]["field"], "name");
    assert_eq!(response.body["path"], "/categories");
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app.post_raw("/categories", "{\"name\":").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);
}

#[tokio::test]
async fn update_renames_and_keeps_id() {
    let app = TestApp::new();

    let response = app
        .put_json("/categories/1", &json!({ "id": 99, "name": "Novels" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["name"], "Novels");

    let product = app.get("/products/1").await;
    assert_eq!(product.body["categories"][0]["name"], "Novels");
}

#[tokio::test]
async fn update_returns_not_found_when_id_does_not_exist() {
    let app = TestApp::new();

    let response = app
        .put_json("/categories/1000", &json!({ "name": "Ghost" }))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Category with id 1000 not found");
}

#[tokio::test]
async fn delete_returns_no_content_for_unreferenced_category() {
    let app = TestApp::new();
    app.post_json("/categories", &json!({ "name": "Garden" }))
        .await;

    let response = app.delete("/categories/4").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get("/categories/4").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_not_found_when_id_does_not_exist() {
    let app = TestApp::new();

    let response = app.delete("/categories/1000").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_bad_request_when_category_is_referenced() {
    let app = TestApp::new();

    let response = app.delete("/categories/3").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Database exception");
    assert_eq!(response.body["message"], "Integrity violation");
    assert_eq!(app.get("/categories").await.body["totalElements"], 3);
}
