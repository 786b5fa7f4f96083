//! HTTP-level tests for `/api/directors`, including delete cascades.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_actor, create_director, create_movie, create_role, delete,
    get, put_json,
};
use serde_json::json;

#[tokio::test]
async fn search_matches_first_or_last_name() {
    let app = build_test_app();
    create_director(&app, "Christopher", "Nolan").await;
    create_director(&app, "Quentin", "Tarantino").await;

    let found = body_json(get(app.clone(), "/api/directors/search?name=nol").await).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["lastName"], "Nolan");

    let found = body_json(get(app.clone(), "/api/directors/search?name=QUENT").await).await;
    assert_eq!(found[0]["firstName"], "Quentin");

    let found = body_json(get(app, "/api/directors/search?name=%25").await).await;
    assert!(found.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_requires_a_name() {
    let app = build_test_app();

    let response = get(app, "/api/directors/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_every_director() {
    let app = build_test_app();
    create_director(&app, "Christopher", "Nolan").await;
    create_director(&app, "Quentin", "Tarantino").await;

    let all = body_json(get(app, "/api/directors").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_of_missing_director_is_not_found() {
    let app = build_test_app();

    let response = put_json(app, "/api/directors/5", json!({ "nationality": "French" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Director not found with ID: 5");
}

#[tokio::test]
async fn deleting_director_removes_movies_and_roles() {
    let app = build_test_app();
    let nolan = create_director(&app, "Christopher", "Nolan").await;
    let tarantino = create_director(&app, "Quentin", "Tarantino").await;
    let actor = create_actor(&app, "Christian", "Bale").await;
    let inception = create_movie(&app, "Inception", "SCI_FI", Some(nolan)).await;
    let pulp_fiction = create_movie(&app, "Pulp Fiction", "CRIME", Some(tarantino)).await;
    let role = create_role(&app, "Arthur", inception, actor).await;

    let response = delete(app.clone(), &format!("/api/directors/{nolan}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(get(app.clone(), &format!("/api/movies/{inception}")).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(app.clone(), &format!("/api/roles/{role}")).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(app.clone(), &format!("/api/movies/{pulp_fiction}")).await.status(), StatusCode::OK);
    assert_eq!(get(app, &format!("/api/actors/{actor}")).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn full_update_with_blank_nationality_is_rejected() {
    let app = build_test_app();
    let id = create_director(&app, "Christopher", "Nolan").await;

    let response = put_json(
        app.clone(),
        &format!("/api/directors/{id}"),
        json!({
            "firstName": "Christopher",
            "lastName": "Nolan",
            "birthDate": "1970-07-30",
            "nationality": ""
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Nationality must not be empty");

    let director = body_json(get(app, &format!("/api/directors/{id}")).await).await;
    assert_eq!(director["nationality"], "British-American");
}
