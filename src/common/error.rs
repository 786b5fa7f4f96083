use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::response::ErrorResponse;

/// Failure raised by the service layer.
///
/// Every handler returns `AppResult`, so this `IntoResponse` impl is the only
/// place where failures become HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidArgument(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Internal(err) => {
                error!(error = ?err, "Unhandled error");
                "An unexpected error occurred".to_string()
            }
            other => {
                warn!(status = status.as_u16(), "{}", other);
                other.to_string()
            }
        };

        ErrorResponse::new(status, message).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation_message(&errors, |_| true))
    }
}

/// Validates only the fields a partial body actually carries.
///
/// `required` failures are dropped, every other rule still applies to the
/// values that are present.
pub fn validate_supplied<T: Validate>(value: &T) -> AppResult<()> {
    let Err(errors) = value.validate() else {
        return Ok(());
    };
    let message = validation_message(&errors, |e| e.code != "required");
    if message.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(message))
    }
}

fn validation_message(errors: &ValidationErrors, keep: impl Fn(&ValidationError) -> bool) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .filter(|e| keep(*e))
                .map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
                .collect::<Vec<_>>()
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_entity_and_id() {
        let (status, json) = render(AppError::not_found("Movie", 1)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "Movie not found with ID: 1");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn invalid_argument_is_bad_request() {
        let (status, json) = render(AppError::InvalidArgument("Invalid genre: bogus".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Bad Request");
        assert_eq!(json["message"], "Invalid genre: bogus");
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let err = AppError::Internal(anyhow::anyhow!("connection refused"));
        let (status, json) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["message"], "An unexpected error occurred");
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(required(message = "Name is required"), length(min = 1, message = "Name must not be empty"))]
        name: Option<String>,
        #[validate(required(message = "Count is required"), range(min = 1, message = "Count must be positive"))]
        count: Option<i32>,
    }

    #[test]
    fn supplied_validation_ignores_missing_fields() {
        let sample = Sample { name: None, count: Some(3) };
        assert!(validate_supplied(&sample).is_ok());
    }

    #[test]
    fn supplied_validation_checks_present_values() {
        let sample = Sample { name: Some(String::new()), count: Some(0) };
        let err = validate_supplied(&sample).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ref m) if m == "Count must be positive, Name must not be empty"),
            "{err}"
        );
    }
}
