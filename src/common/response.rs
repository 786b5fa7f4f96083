use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// A successful JSON body with an explicit status code.
pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T> ApiSuccess<T> {
    pub fn ok(body: T) -> Self {
        Self(body, StatusCode::OK)
    }

    pub fn created(body: T) -> Self {
        Self(body, StatusCode::CREATED)
    }
}

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (body, status) = (self.0, self.1);
        (status, Json(body)).into_response()
    }
}

/// Structured error body shared by every endpoint.
///
/// The rendered response also carries the body as an extension so that
/// `middleware::request_path` can stamp the request path into it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime, example = "2024-01-01T12:00:00Z")]
    pub timestamp: OffsetDateTime,
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "Movie not found with ID: 1")]
    pub message: String,
    #[schema(example = "/api/movies/1")]
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: String::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.clone())).into_response();
        response.extensions_mut().insert(self);
        response
    }
}
