//! Error Body Path Stamping
//!
//! [`AppError`](crate::shared::error::AppError) responses are rendered before
//! the request path is known. This middleware swaps in a body carrying the
//! path of the request that failed; status and headers are kept.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::shared::error::ErrorResponse;

pub async fn stamp_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    let (mut parts, body) = response.into_parts();

    let Some(mut error) = parts.extensions.remove::<ErrorResponse>() else {
        return Response::from_parts(parts, body);
    };
    error.path = path;

    let (rendered, rendered_body) = Json(error).into_response().into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    if let Some(content_type) = rendered.headers.get(header::CONTENT_TYPE) {
        parts.headers.insert(header::CONTENT_TYPE, content_type.clone());
    }

    Response::from_parts(parts, rendered_body)
}
