use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] folio_contact::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Contact(folio_contact::Error::MethodNotAllowed) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                "Method Not Allowed",
            )
                .into_response(),
            AppError::Contact(folio_contact::Error::MalformedRequest(reason)) => {
                tracing::warn!(%reason, "Malformed inquiry");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "status": "malformed_request",
                        "reason": reason
                    })),
                )
                    .into_response()
            }
            AppError::Contact(folio_contact::Error::Delivery(e)) => {
                tracing::error!("Delivery error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": "failure"})),
                )
                    .into_response()
            }
        }
    }
}
