mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app, token_for};
use http_body_util::BodyExt;
use packrat::config::app::Environment;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn request(method: &str, uri: &str, token: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token));

    match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn create_item(app: &axum::Router, token: &str, title: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/items",
            token,
            Some(json!({
                "title": title,
                "description": "A thing worth keeping"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_get_item(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let token = token_for(user.id);

    let app = setup_test_app(pool, Environment::Local);
    let item = create_item(&app, &token, "Flashlight").await;

    assert_eq!(item["title"], "Flashlight");
    assert_eq!(item["owner_id"], user.id.to_string());

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/items/{}", item["id"].as_str().unwrap()),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Flashlight");
    assert_eq!(body["description"], "A thing worth keeping");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_items_scoped_to_owner(pool: PgPool) {
    let alice = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let bob = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let alice_token = token_for(alice.id);
    let bob_token = token_for(bob.id);

    let app = setup_test_app(pool, Environment::Local);
    create_item(&app, &alice_token, "Alice's item").await;
    create_item(&app, &bob_token, "Bob's item").await;

    let response = app
        .oneshot(request("GET", "/api/items", &alice_token, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Alice's item");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_superuser_sees_all_items(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass123", true, true).await;
    let user = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let admin_token = token_for(admin.id);
    let user_token = token_for(user.id);

    let app = setup_test_app(pool, Environment::Local);
    create_item(&app, &user_token, "User's item").await;
    create_item(&app, &admin_token, "Admin's item").await;

    let response = app
        .oneshot(request("GET", "/api/items", &admin_token, None))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_item_not_owner(pool: PgPool) {
    let owner = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let other = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let owner_token = token_for(owner.id);
    let other_token = token_for(other.id);

    let app = setup_test_app(pool, Environment::Local);
    let item = create_item(&app, &owner_token, "Private item").await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/items/{}", item_id),
            &other_token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Not enough permissions");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_superuser_can_access_any_item(pool: PgPool) {
    let owner = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass123", true, true).await;
    let owner_token = token_for(owner.id);
    let admin_token = token_for(admin.id);

    let app = setup_test_app(pool, Environment::Local);
    let item = create_item(&app, &owner_token, "Someone's item").await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/items/{}", item_id),
            &admin_token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_item_partial(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let token = token_for(user.id);

    let app = setup_test_app(pool, Environment::Local);
    let item = create_item(&app, &token, "Old title").await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/api/items/{}", item_id),
            &token,
            Some(json!({ "title": "New title" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], "New title");
    // Absent fields keep their previous value.
    assert_eq!(body["description"], "A thing worth keeping");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_item_not_owner(pool: PgPool) {
    let owner = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let other = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let owner_token = token_for(owner.id);
    let other_token = token_for(other.id);

    let app = setup_test_app(pool, Environment::Local);
    let item = create_item(&app, &owner_token, "Owned item").await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/api/items/{}", item_id),
            &other_token,
            Some(json!({ "title": "Hijacked" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_item(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let token = token_for(user.id);

    let app = setup_test_app(pool, Environment::Local);
    let item = create_item(&app, &token, "Disposable").await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/items/{}", item_id),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Item deleted successfully");

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/items/{}", item_id),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_missing_item(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "testpass123", true, false).await;
    let token = token_for(user.id);

    let app = setup_test_app(pool, Environment::Local);
    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/items/{}", Uuid::new_v4()),
            &token,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Item not found");
}
