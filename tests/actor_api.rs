//! HTTP-level tests for `/api/actors`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_actor, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn created_actor_is_found_by_partial_name() {
    let app = build_test_app();

    let response = post_json(
        app.clone(),
        "/api/actors",
        json!({
            "firstName": "Tom",
            "lastName": "Hanks",
            "birthDate": "1956-07-09",
            "nationality": "American"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].is_i64());
    assert_eq!(created["birthDate"], "1956-07-09");

    let response = get(app, "/api/actors/search?name=Han").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["lastName"], "Hanks");
}

#[tokio::test]
async fn listing_is_paged() {
    let app = build_test_app();
    for (first, last) in [("Tom", "Hanks"), ("Meryl", "Streep"), ("Denzel", "Washington")] {
        create_actor(&app, first, last).await;
    }

    let page = body_json(get(app.clone(), "/api/actors?page=1&size=2").await).await;
    assert_eq!(page["content"].as_array().unwrap().len(), 1);
    assert_eq!(page["page"], 1);
    assert_eq!(page["size"], 2);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["first"], false);
    assert_eq!(page["last"], true);

    let page = body_json(get(app, "/api/actors").await).await;
    assert_eq!(page["size"], 10);
    assert_eq!(page["first"], true);
    assert_eq!(page["content"][0]["lastName"], "Hanks");
}

#[tokio::test]
async fn listing_sorts_by_requested_field() {
    let app = build_test_app();
    for (first, last) in [("Tom", "Hanks"), ("Meryl", "Streep"), ("Denzel", "Washington")] {
        create_actor(&app, first, last).await;
    }

    let page = body_json(get(app.clone(), "/api/actors?sort=firstName&direction=DESC").await).await;
    let names: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tom", "Meryl", "Denzel"]);

    let page = body_json(get(app, "/api/actors?sort=last_name&direction=sideways").await).await;
    assert_eq!(page["content"][0]["lastName"], "Hanks");
}

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let app = build_test_app();

    let response = get(app, "/api/actors?sort=shoeSize").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid sort field: shoeSize");
}

#[tokio::test]
async fn zero_page_size_is_rejected() {
    let app = build_test_app();

    let response = get(app, "/api/actors?size=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_required_fields_fail_validation() {
    let app = build_test_app();

    let response = post_json(app, "/api/actors", json!({ "firstName": "Tom" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = body_json(response).await["message"].as_str().unwrap().to_string();
    assert!(message.contains("Last name is required"), "{message}");
    assert!(message.contains("Birth date is required"), "{message}");
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = build_test_app();
    let id = create_actor(&app, "Tom", "Hanks").await;

    let response = put_json(app.clone(), &format!("/api/actors/{id}"), json!({ "nationality": "American-Greek" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let actor = body_json(get(app, &format!("/api/actors/{id}")).await).await;
    assert_eq!(actor["firstName"], "Tom");
    assert_eq!(actor["birthDate"], "1956-07-09");
    assert_eq!(actor["nationality"], "American-Greek");
}

#[tokio::test]
async fn full_update_replaces_every_field() {
    let app = build_test_app();
    let id = create_actor(&app, "Tom", "Hanks").await;

    let response = put_json(
        app,
        &format!("/api/actors/{id}"),
        json!({
            "id": 999,
            "firstName": "Thomas",
            "lastName": "Hanks",
            "birthDate": "1956-07-10",
            "nationality": "USA"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let actor = body_json(response).await;
    assert_eq!(actor["id"], id);
    assert_eq!(actor["firstName"], "Thomas");
    assert_eq!(actor["birthDate"], "1956-07-10");
}

#[tokio::test]
async fn deleting_missing_actor_is_not_found() {
    let app = build_test_app();

    let response = delete(app, "/api/actors/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Actor not found with ID: 99");
}

#[tokio::test]
async fn deleted_actor_is_gone() {
    let app = build_test_app();
    let id = create_actor(&app, "Tom", "Hanks").await;

    assert_eq!(delete(app.clone(), &format!("/api/actors/{id}")).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(app, &format!("/api/actors/{id}")).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_page_request_is_rejected() {
    let app = build_test_app();

    let response = get(app.clone(), "/api/actors?page=4294967295&size=4294967295").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Page size must be between 1 and 1000");

    let response = get(app, "/api/actors/search?name=a&size=5000").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn page_far_past_the_end_is_empty() {
    let app = build_test_app();
    create_actor(&app, "Tom", "Hanks").await;

    let response = get(app.clone(), "/api/actors?page=4294967295&size=1000").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert!(page["content"].as_array().unwrap().is_empty());
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["last"], true);

    let response = get(app, "/api/actors/search?name=Han&page=4294967295").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["content"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_with_empty_name_is_rejected() {
    let app = build_test_app();
    let id = create_actor(&app, "Tom", "Hanks").await;

    let response = put_json(app.clone(), &format!("/api/actors/{id}"), json!({ "firstName": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "First name must not be empty");

    let actor = body_json(get(app, &format!("/api/actors/{id}")).await).await;
    assert_eq!(actor["firstName"], "Tom");
}
