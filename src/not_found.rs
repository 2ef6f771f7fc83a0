use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ErrorDetail;

/// The fallback route handler for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetail {
            detail: "Not Found",
        }),
    )
        .into_response()
}
