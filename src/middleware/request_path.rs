use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::common::response::ErrorResponse;

/// Fills `path` on error bodies rendered further down the stack.
pub async fn attach_request_path(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut response = next.run(req).await;

    match response.extensions_mut().remove::<ErrorResponse>() {
        Some(body) if body.path.is_empty() => {
            let mut stamped = body.with_path(path).into_response();
            *stamped.status_mut() = response.status();
            stamped
        }
        Some(body) => {
            response.extensions_mut().insert(body);
            response
        }
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::AppError;
    use axum::{body::to_bytes, body::Body, http, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    async fn missing() -> Result<&'static str, AppError> {
        Err(AppError::not_found("Movie", 7))
    }

    #[tokio::test]
    async fn error_body_gets_request_path() {
        let app = Router::new()
            .route("/api/movies/7", get(missing))
            .layer(axum::middleware::from_fn(attach_request_path));

        let response = app
            .oneshot(http::Request::builder().uri("/api/movies/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["path"], "/api/movies/7");
        assert_eq!(json["message"], "Movie not found with ID: 7");
    }

    #[tokio::test]
    async fn success_bodies_pass_through() {
        let app = Router::new()
            .route("/api/health", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(attach_request_path));

        let response = app
            .oneshot(http::Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
