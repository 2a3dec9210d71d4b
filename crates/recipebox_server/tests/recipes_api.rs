use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use recipebox_server::http::with_middleware;
use recipebox_server::{build_router, AppState};
use serde_json::{json, Value};
use std::fs;
use tower::ServiceExt;

fn app_in(dir: &tempfile::TempDir) -> Router {
    build_router(AppState::new(dir.path().join("recipes.json")))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };
    (status, body)
}

fn get_recipes() -> Request<Body> {
    Request::builder()
        .uri("/api/recipes")
        .body(Body::empty())
        .expect("request should build")
}

fn post_recipe(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/recipes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request should build")
}

#[tokio::test]
async fn get_returns_empty_array_without_data_file() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let (status, body) = send(&app, get_recipes()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn post_creates_recipe_and_get_lists_it() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let payload = json!({ "title": "Tea", "instructions": "Boil water" });
    let (status, created) = send(&app, post_recipe(payload.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(created["title"], "Tea");
    assert_eq!(created["ingredients"], json!([]));
    assert_eq!(created["instructions"], "Boil water");

    let (status, listed) = send(&app, get_recipes()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn post_normalizes_comma_separated_ingredients() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let payload = json!({ "title": "  Soup ", "ingredients": "a, b ,c" });
    let (status, created) = send(&app, post_recipe(payload.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Soup");
    assert_eq!(created["ingredients"], json!(["a", "b", "c"]));
    assert_eq!(created["instructions"], "");
}

#[tokio::test]
async fn post_with_blank_title_is_bad_request() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    for payload in [json!({ "title": "   " }), json!({ "ingredients": ["x"] })] {
        let (status, body) = send(&app, post_recipe(payload.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "title required" }));
    }

    let (_, listed) = send(&app, get_recipes()).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn post_with_invalid_ingredients_is_bad_request() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let payload = json!({ "title": "Soup", "ingredients": { "salt": 1 } });
    let (status, body) = send(&app, post_recipe(payload.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid ingredients" }));
}

#[tokio::test]
async fn post_with_malformed_json_is_bad_request() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let (status, body) = send(&app, post_recipe("{\"title\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid JSON body" }));
}

#[tokio::test]
async fn post_without_json_content_type_fails_on_title() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/recipes")
        .body(Body::from(json!({ "title": "Tea" }).to_string()))
        .expect("request should build");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "title required" }));

    let (_, listed) = send(&app, get_recipes()).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn post_keeps_undecodable_catalog_intact() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let data_file = dir.path().join("recipes.json");
    let raw = r#"[{"id":"1","title":"Pancakes","ingredients":[2],"instructions":""}]"#;
    fs::write(&data_file, raw).expect("fixture should be written");
    let app = build_router(AppState::new(&data_file));

    let (status, body) = send(&app, post_recipe(json!({ "title": "Tea" }).to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to save recipe" }));
    assert_eq!(fs::read_to_string(&data_file).unwrap(), raw);
}

#[tokio::test]
async fn post_reports_storage_failure_as_server_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "plain file").expect("fixture should be written");
    let app = build_router(AppState::new(blocker.join("recipes.json")));

    let (status, body) = send(&app, post_recipe(json!({ "title": "Tea" }).to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to save recipe" }));

    let (status, listed) = send(&app, get_recipes()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn health_reports_version() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request should build");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], recipebox_core::core_version());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let app = app_in(&dir);

    let request = Request::builder()
        .uri("/api/unknown")
        .body(Body::empty())
        .expect("request should build");
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn exploding_handler() -> &'static str {
    panic!("handler exploded")
}

#[tokio::test]
async fn handler_panic_becomes_internal_error() {
    let app = with_middleware(Router::new().route("/boom", get(exploding_handler)));

    for _ in 0..2 {
        let request = Request::builder()
            .uri("/boom")
            .body(Body::empty())
            .expect("request should build");
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "internal server error" }));
    }
}
