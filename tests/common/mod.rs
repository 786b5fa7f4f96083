#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use movie_catalog::app::create_app;
use movie_catalog::config::settings::AppConfig;
use movie_catalog::infrastructure::db::memory::MemoryStore;
use movie_catalog::infrastructure::db::pool::PgStore;
use movie_catalog::state::AppState;

/// Build the full application router over an empty in-memory store.
pub fn build_test_app() -> Router {
    let state = AppState::new(AppConfig::default(), MemoryStore::new());
    create_app(state)
}

/// Build the full application router over a migrated test database.
pub fn build_pg_test_app(pool: PgPool) -> Router {
    let state = AppState::new(AppConfig::default(), PgStore::new(pool));
    create_app(state)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST `body` to `uri`, expect 201 and return the created id.
pub async fn create(app: &Router, uri: &str, body: Value) -> i64 {
    let response = post_json(app.clone(), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri} failed");
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn create_director(app: &Router, first_name: &str, last_name: &str) -> i64 {
    create(
        app,
        "/api/directors",
        json!({
            "firstName": first_name,
            "lastName": last_name,
            "birthDate": "1970-07-30",
            "nationality": "British-American"
        }),
    )
    .await
}

pub async fn create_actor(app: &Router, first_name: &str, last_name: &str) -> i64 {
    create(
        app,
        "/api/actors",
        json!({
            "firstName": first_name,
            "lastName": last_name,
            "birthDate": "1956-07-09",
            "nationality": "American"
        }),
    )
    .await
}

pub async fn create_movie(app: &Router, title: &str, genre: &str, director_id: Option<i64>) -> i64 {
    create(
        app,
        "/api/movies",
        json!({
            "title": title,
            "genre": genre,
            "releaseDate": "2010-07-16",
            "durationMinutes": 148,
            "directorId": director_id
        }),
    )
    .await
}

pub async fn create_role(app: &Router, character_name: &str, movie_id: i64, actor_id: i64) -> i64 {
    create(
        app,
        "/api/roles",
        json!({
            "characterName": character_name,
            "movieId": movie_id,
            "actorId": actor_id
        }),
    )
    .await
}
