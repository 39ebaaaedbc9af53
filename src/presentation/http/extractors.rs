//! Custom Extractors
//!
//! Axum extractors that turn request parsing failures into [`AppError`]s so
//! every rejection uses the common error body.

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::config::PaginationSettings;
use crate::domain::{PageRequest, Sort};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Listing query parameters: `?page=0&size=12&sort=name,desc`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl PageParams {
    /// Resolve into a [`PageRequest`], applying the configured default and
    /// maximum size and restricting sorting to `sortable` fields.
    pub fn into_page_request(
        self,
        sortable: &[&str],
        settings: &PaginationSettings,
    ) -> Result<PageRequest, AppError> {
        let size = match self.size {
            Some(0) => {
                return Err(AppError::BadRequest(
                    "Page size must be greater than zero".into(),
                ))
            }
            Some(size) => size.min(settings.max_size),
            None => settings.default_size,
        };

        let request = PageRequest::of(self.page.unwrap_or(0), size);

        let Some(raw) = self.sort.filter(|s| !s.trim().is_empty()) else {
            return Ok(request);
        };

        let sort: Sort = raw
            .parse()
            .map_err(|e: crate::domain::ParseSortError| AppError::BadRequest(e.to_string()))?;

        if !sortable.contains(&sort.property.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Cannot sort by '{}'; allowed fields: {}",
                sort.property,
                sortable.join(", ")
            )));
        }

        Ok(request.sorted(sort))
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(params)
    }
}

/// JSON body that has passed `validator` checks.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(validation_error)?;

        Ok(Self(value))
    }
}

/// Parse a path id segment, rejecting anything that is not an integer.
pub fn parse_id(raw: &str, resource: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", resource)))
}
