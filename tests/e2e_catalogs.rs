use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{TestApp, assert_error_response};

#[tokio::test]
async fn create_derives_slug_and_keeps_nested_content() {
    let app = TestApp::new();

    let resp = app
        .json(
            Method::POST,
            "/api/catalogs",
            json!({
                "title": "Spices Catalog",
                "published": true,
                "colorTheme": { "primary": "#fff", "gradient": ["#fff", "#000"] },
                "sections": {
                    "variants": [{ "name": "Turmeric", "curcumin": "3-5%" }],
                    "useCases": ["Retail"]
                },
                "cta": { "title": "Order now" }
            }),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let data = resp.data();
    assert_eq!(data["slug"], "spices-catalog");
    assert_eq!(data["colorTheme"]["gradient"], json!(["#fff", "#000"]));
    assert_eq!(data["sections"]["variants"][0]["curcumin"], "3-5%");
    assert_eq!(data["sections"]["useCases"], json!(["Retail"]));
    assert_eq!(data["cta"]["title"], "Order now");
}

#[tokio::test]
async fn create_requires_a_title() {
    let app = TestApp::new();

    let resp = app
        .json(Method::POST, "/api/catalogs", json!({ "description": "no title" }))
        .await;
    assert_error_response(&resp, StatusCode::BAD_REQUEST, "Title is required");
}

#[tokio::test]
async fn explicit_slugs_are_deduplicated() {
    let app = TestApp::new();

    let first = app
        .json(Method::POST, "/api/catalogs", json!({ "title": "Rice", "slug": "grains" }))
        .await;
    let second = app
        .json(Method::POST, "/api/catalogs", json!({ "title": "Wheat", "slug": "grains" }))
        .await;
    assert_eq!(first.data()["slug"], "grains");
    assert_eq!(second.data()["slug"], "grains-1");
}

#[tokio::test]
async fn update_recomputes_slug_from_stored_title() {
    let app = TestApp::new();

    let created = app
        .json(Method::POST, "/api/catalogs", json!({ "title": "Pulses", "slug": "custom" }))
        .await;
    let id = created.data()["_id"].as_str().unwrap().to_string();

    let updated = app
        .json(
            Method::PUT,
            &format!("/api/catalogs/{id}"),
            json!({ "description": "Lentils and beans" }),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["slug"], "pulses");
    assert_eq!(updated.data()["description"], "Lentils and beans");
    assert_eq!(updated.data()["title"], "Pulses");
}

#[tokio::test]
async fn drafts_are_hidden_from_public_routes() {
    let app = TestApp::new();

    let created = app
        .json(Method::POST, "/api/catalogs", json!({ "title": "Secret Line" }))
        .await;
    let id = created.data()["_id"].as_str().unwrap().to_string();

    assert_eq!(app.get("/api/catalogs").await.data(), &json!([]));
    let by_slug = app.get("/api/catalogs/by-slug/secret-line").await;
    assert_error_response(&by_slug, StatusCode::NOT_FOUND, "Catalog not found");

    let admin = app.get("/api/admin/catalogs").await;
    assert_eq!(admin.data().as_array().map(Vec::len), Some(1));

    let by_id = app.get(&format!("/api/catalogs/{id}")).await;
    assert_eq!(by_id.status, StatusCode::OK);
}

#[tokio::test]
async fn seeding_creates_then_refreshes_builtin_catalogs() {
    let app = TestApp::new();

    let first = app.json(Method::POST, "/api/catalogs/seed", json!({})).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(
        first.data(),
        &json!([
            { "slug": "makhana", "action": "created" },
            { "slug": "spices", "action": "created" },
            { "slug": "agricultural", "action": "created" }
        ])
    );

    let makhana = app.get("/api/catalogs/by-slug/makhana").await;
    assert_eq!(makhana.status, StatusCode::OK);
    assert_eq!(makhana.data()["title"], "Makhana Catalog");

    let second = app.json(Method::POST, "/api/catalogs/seed", json!({})).await;
    let actions: Vec<&str> = second
        .data()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["action"].as_str())
        .collect();
    assert_eq!(actions, ["updated", "updated", "updated"]);
    assert_eq!(app.catalogs.all().len(), 3);
}

#[tokio::test]
async fn delete_unknown_catalog_is_not_found() {
    let app = TestApp::new();

    let resp = app.delete("/api/catalogs/65a1b2c3d4e5f60718293a4b").await;
    assert_error_response(&resp, StatusCode::NOT_FOUND, "Catalog not found");
}
