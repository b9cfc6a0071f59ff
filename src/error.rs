use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use canteen_shared::FieldErrors;
use serde_json::json;

/// Error returned by every API handler. Renders as a JSON body with the
/// matching status code.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub canteen_shared::Error);

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(canteen_shared::Error::Unknown(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert("body", rejection.body_text());
        Self(canteen_shared::Error::Validate(fields))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self(errors.into())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            canteen_shared::Error::Validate(_) => StatusCode::BAD_REQUEST,
            canteen_shared::Error::Unauthorized => StatusCode::UNAUTHORIZED,
            canteen_shared::Error::Forbidden => StatusCode::FORBIDDEN,
            canteen_shared::Error::NotFound(_) => StatusCode::NOT_FOUND,
            canteen_shared::Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.0 {
            canteen_shared::Error::Validate(details) => json!({
                "error": "ValidationFailed",
                "message": "Invalid request.",
                "details": details,
            }),
            canteen_shared::Error::Unauthorized => json!({
                "error": "Unauthorized",
                "message": "Sign in to continue.",
            }),
            canteen_shared::Error::Forbidden => json!({
                "error": "Forbidden",
                "message": "You do not have access to this resource.",
            }),
            canteen_shared::Error::NotFound(what) => json!({
                "error": "NotFound",
                "message": format!("{what} not found"),
            }),
            canteen_shared::Error::Unknown(e) => {
                tracing::error!(error = ?e, "request failed");
                json!({
                    "error": "InternalServerError",
                    "message": "Something went wrong. Please try again later.",
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
