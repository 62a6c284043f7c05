use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::auth::password::PasswordError;
use crate::models::ApiResponse;
use crate::repository::RepositoryError;
use crate::utils::validation::field_messages;

const INTERNAL_MESSAGE: &str = "Something went wrong, Contact with system admin";

/// Business-rule failures raised by the employee service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Employee with email {0} already exists")]
    DuplicateEntity(String),
    #[error("Employee not found with id: {0}")]
    NotFound(u64),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Everything a handler can fail with. Rendered as the standard envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::DuplicateEntity(_)) => StatusCode::CONFLICT,
            ApiError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body: ApiResponse<Value> = match self {
            ApiError::Validation(errors) => ApiResponse::failure(
                self.to_string(),
                serde_json::to_value(field_messages(errors)).ok(),
            ),
            ApiError::Service(e @ (ServiceError::Repository(_) | ServiceError::Password(_))) => {
                error!(error = %e, "Employee operation failed");
                ApiResponse::failure(INTERNAL_MESSAGE, None)
            }
            _ => ApiResponse::failure(self.to_string(), None),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
