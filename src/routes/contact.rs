use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{error::AppError, routes::AppState};

/// Largest accepted inquiry body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Contact form submission, standing in for the on-demand email function.
///
/// The method is checked before the body is read.
pub async fn action(State(app_state): State<AppState>, request: Request<Body>) -> Response {
    if let Err(err) = folio_contact::check_method(request.method().as_str()) {
        return AppError::from(err).into_response();
    }

    let body = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(err) => {
            return AppError::from(folio_contact::Error::MalformedRequest(err.to_string()))
                .into_response();
        }
    };

    match app_state.contact_command.submit_json(&body).await {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "success"}))).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
