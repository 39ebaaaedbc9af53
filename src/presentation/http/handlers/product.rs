//! Product Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::application::dto::{PageResponse, ProductDto};
use crate::domain::Product;
use crate::presentation::http::extractors::{parse_id, PageParams, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List products, one page at a time, with their categories
pub async fn list_products(
    State(state): State<AppState>,
    params: PageParams,
) -> Result<Json<PageResponse<ProductDto>>, AppError> {
    let request = params.into_page_request(Product::SORTABLE_FIELDS, &state.pagination)?;

    let page = state.product_service.list_paged(request).await?;

    Ok(Json(PageResponse::from(page)))
}

/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductDto>, AppError> {
    let product_id = parse_id(&product_id, "product")?;

    let product = state.product_service.get_by_id(product_id).await?;

    Ok(Json(product))
}

/// Create a new product and link its categories
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ProductDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ProductDto>), AppError> {
    let product = state.product_service.create(body).await?;

    let location = format!("/products/{}", product.id.unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Replace a product and its category set
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    ValidatedJson(body): ValidatedJson<ProductDto>,
) -> Result<Json<ProductDto>, AppError> {
    let product_id = parse_id(&product_id, "product")?;

    let product = state.product_service.update(product_id, body).await?;

    Ok(Json(product))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let product_id = parse_id(&product_id, "product")?;

    state.product_service.delete(product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
