use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_product::product::error::{FieldError, ProductError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(err) => ApiError::Validation(err),
            err @ ProductError::InvalidState(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let fields = match &err {
            ApiError::Validation(validation) => validation.errors().to_vec(),
            _ => vec![],
        };

        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
            fields,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Error: {:#?}", self);
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_product::product::error::Field;

    #[test]
    fn test_status_codes() {
        let validation = ValidationError::new(vec![FieldError::new(Field::Name, "must not be empty")]);

        assert_eq!(ApiError::from(validation).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MalformedBody("EOF".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ProductError::InvalidState(3)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_server_errors_are_logged_once() {
        let response = ApiError::from(ProductError::InvalidState(3)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        logs_assert(|lines: &[&str]| {
            match lines.iter().filter(|line| line.contains("identity `3`")).count() {
                1 => Ok(()),
                n => Err(format!("expected one error log line, got {n}")),
            }
        });
    }

    #[test]
    fn test_error_response_lists_fields_for_validation_errors_only() {
        let validation = ValidationError::new(vec![FieldError::new(Field::Price, "must not be negative")]);

        let body = serde_json::to_value(ErrorResponse::from(ApiError::from(validation))).unwrap();
        assert_eq!(body["code"], 400);
        assert_eq!(body["fields"][0]["field"], "preco");

        let body = serde_json::to_value(ErrorResponse::from(ApiError::from(ProductError::InvalidState(3)))).unwrap();
        assert_eq!(body["code"], 500);
        assert!(body.get("fields").is_none());
    }
}
