//! Category Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::application::dto::{CategoryDto, PageResponse};
use crate::domain::Category;
use crate::presentation::http::extractors::{parse_id, PageParams, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List categories, one page at a time
pub async fn list_categories(
    State(state): State<AppState>,
    params: PageParams,
) -> Result<Json<PageResponse<CategoryDto>>, AppError> {
    let request = params.into_page_request(Category::SORTABLE_FIELDS, &state.pagination)?;

    let page = state.category_service.list_paged(request).await?;

    Ok(Json(PageResponse::from(page)))
}

/// Get category by ID
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryDto>, AppError> {
    let category_id = parse_id(&category_id, "category")?;

    let category = state.category_service.get_by_id(category_id).await?;

    Ok(Json(category))
}

/// Create a new category
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CategoryDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CategoryDto>), AppError> {
    let category = state.category_service.create(body).await?;

    let location = format!("/categories/{}", category.id.unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category),
    ))
}

/// Rename a category
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CategoryDto>,
) -> Result<Json<CategoryDto>, AppError> {
    let category_id = parse_id(&category_id, "category")?;

    let category = state.category_service.update(category_id, body).await?;

    Ok(Json(category))
}

/// Delete a category
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let category_id = parse_id(&category_id, "category")?;

    state.category_service.delete(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
