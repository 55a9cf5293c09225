//! HTTP-level tests for services, projects, About/Hero and contact messages.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, init_and_login, post_json, post_json_auth,
    put_json_auth,
};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_service(pool: &PgPool, token: &str, title: &str, order: i64) -> Value {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/services",
        json!({ "title": title, "description": "d", "order": order }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_project(pool: &PgPool, token: &str, service_id: i64, title: &str, order: i64) -> Value {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/projects",
        json!({
            "service_id": service_id,
            "title": title,
            "media_type": "image",
            "media_url": "https://cdn.test/media/1-a.png",
            "order": order,
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn titles(list: &Value) -> Vec<&str> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_services_listed_by_order(pool: PgPool) {
    let token = init_and_login(&pool).await;
    create_service(&pool, &token, "Third", 3).await;
    create_service(&pool, &token, "First", 1).await;
    create_service(&pool, &token, "Second", 2).await;

    let response = get(common::build_test_app(pool), "/api/services").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(titles(&json), vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_order_accepts_numeric_string(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/admin/services",
        json!({ "title": "Posters", "order": "7" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["order"], 7);
    assert_eq!(json["description"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_create_requires_title(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/admin/services",
        json!({ "description": "no title" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_create_requires_auth(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/admin/services",
        json!({ "title": "Sneaky" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_service_is_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/services/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_service_id_is_json_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/services/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"), "got {content_type}");

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("abc"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_admin_ids_are_json_400(pool: PgPool) {
    let token = init_and_login(&pool).await;

    for uri in ["/api/admin/projects/abc", "/api/admin/contacts/abc", "/api/admin/services/abc"] {
        let response = delete_auth(common::build_test_app(pool.clone()), uri, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_service_merges_fields(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let created = create_service(&pool, &token, "Logos", 1).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/services/{id}"),
        json!({ "image": "https://cdn.test/media/logo.png" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Logos");
    assert_eq!(json["image"], "https://cdn.test/media/logo.png");

    let missing = put_json_auth(
        common::build_test_app(pool),
        "/api/admin/services/9999",
        json!({ "title": "x" }),
        &token,
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_service_cascades_to_projects(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let service = create_service(&pool, &token, "Packaging", 1).await;
    let service_id = service["id"].as_i64().unwrap();
    let project = create_project(&pool, &token, service_id, "Box", 1).await;
    let project_id = project["id"].as_i64().unwrap();

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/services/{service_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Service deleted successfully");

    let gone = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/projects/{project_id}"),
        &token,
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let again = delete_auth(
        common::build_test_app(pool),
        &format!("/api/admin/services/{service_id}"),
        &token,
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_projects_listed_by_order(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let service = create_service(&pool, &token, "Posters", 1).await;
    let service_id = service["id"].as_i64().unwrap();
    create_project(&pool, &token, service_id, "B", 2).await;
    create_project(&pool, &token, service_id, "A", 1).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/services/{service_id}/projects"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(titles(&json), vec!["A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_project_list_includes_service(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let service = create_service(&pool, &token, "Branding", 1).await;
    let service_id = service["id"].as_i64().unwrap();
    create_project(&pool, &token, service_id, "Identity", 1).await;

    let response = get_auth(common::build_test_app(pool), "/api/admin/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let first = &json[0];
    assert_eq!(first["title"], "Identity");
    assert_eq!(first["services"]["id"], service_id);
    assert_eq!(first["services"]["title"], "Branding");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_with_unknown_service_is_400(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/admin/projects",
        json!({
            "service_id": 424242,
            "title": "Orphan",
            "media_type": "video",
            "media_url": "https://cdn.test/media/1-a.mp4",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_rejects_unknown_media_type(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let service = create_service(&pool, &token, "Posters", 1).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/admin/projects",
        json!({
            "service_id": service["id"],
            "title": "Audio",
            "media_type": "audio",
            "media_url": "https://cdn.test/media/1-a.mp3",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_update_and_delete(pool: PgPool) {
    let token = init_and_login(&pool).await;
    let service = create_service(&pool, &token, "Posters", 1).await;
    let project = create_project(&pool, &token, service["id"].as_i64().unwrap(), "Gig", 1).await;
    let id = project["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/projects/{id}"),
        json!({ "media_type": "video", "media_url": "https://cdn.test/media/2-b.mp4" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["media_type"], "video");
    assert_eq!(json["title"], "Gig");

    let deleted = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/projects/{id}"),
        &token,
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(body_json(deleted).await["message"], "Project deleted successfully");

    let again = delete_auth(
        common::build_test_app(pool),
        &format!("/api/admin/projects/{id}"),
        &token,
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// About / Hero
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_and_hero_defaults_when_empty(pool: PgPool) {
    let about = body_json(get(common::build_test_app(pool.clone()), "/api/about").await).await;
    assert_eq!(about["projects_completed"], 150);
    assert_eq!(about["happy_clients"], 50);
    assert_eq!(about["years_experience"], 8);
    assert!(about.get("id").is_none());

    let hero = body_json(get(common::build_test_app(pool), "/api/hero").await).await;
    assert_eq!(hero["title"], "THE VISUAL MAYA");
    assert_eq!(hero["logo_url"], "/logo.png");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_upsert_keeps_single_row(pool: PgPool) {
    let token = init_and_login(&pool).await;

    let first = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/about",
        json!({ "description1": "Hello", "projects_completed": "200" }),
        &token,
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;

    let second = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/about",
        json!({ "happy_clients": 75 }),
        &token,
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);
    let second = body_json(second).await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["description1"], "Hello");
    assert_eq!(second["projects_completed"], 200);
    assert_eq!(second["happy_clients"], 75);

    let public = body_json(get(common::build_test_app(pool), "/api/about").await).await;
    assert_eq!(public["id"], first["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_upsert_then_read(pool: PgPool) {
    let token = init_and_login(&pool).await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/hero",
        json!({ "title": "NEW TITLE" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let hero = body_json(get(common::build_test_app(pool), "/api/hero").await).await;
    assert_eq!(hero["title"], "NEW TITLE");
    assert!(hero["id"].is_number());
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_submission_is_stored(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/contact",
        json!({ "name": "Ann", "email": "ann@example.com", "message": "Hi there" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Thank you for your message! We will get back to you soon."
    );

    let token = init_and_login(&pool).await;
    let list = body_json(get_auth(common::build_test_app(pool), "/api/admin/contacts", &token).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["subject"], "No Subject");
    assert_eq!(list[0]["name"], "Ann");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_missing_fields_is_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/contact",
        json!({ "name": "Ann", "message": "No email" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing required fields");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_succeeds_even_when_store_fails(pool: PgPool) {
    sqlx::query("DROP TABLE contacts").execute(&pool).await.unwrap();

    let response = post_json(
        common::build_test_app(pool),
        "/api/contact",
        json!({ "name": "Ann", "email": "ann@example.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_contact(pool: PgPool) {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/contact",
        json!({ "name": "Ann", "email": "ann@example.com", "message": "Hi" }),
    )
    .await;
    let token = init_and_login(&pool).await;
    let list = body_json(get_auth(common::build_test_app(pool.clone()), "/api/admin/contacts", &token).await).await;
    let id = list[0]["id"].as_i64().unwrap();

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/contacts/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let again = delete_auth(
        common::build_test_app(pool),
        &format!("/api/admin/contacts/{id}"),
        &token,
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
