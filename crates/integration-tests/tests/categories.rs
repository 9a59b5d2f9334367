mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;

async fn start() -> TestServer {
    TestServer::start(ConfigBuilder::new().build()).await.unwrap()
}

#[tokio::test]
async fn save_returns_created_category() {
    let server = start().await;

    let body = serde_json::json!({
        "name": "electronics",
        "description": "devices and gadgets"
    });

    let resp = server
        .client()
        .post(server.url("/api/v1/categories"))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);

    let category: serde_json::Value = resp.json().await.unwrap();
    assert!(!category["id"].as_str().unwrap().is_empty());
    assert_eq!(category["name"], "electronics");
    assert_eq!(category["description"], "devices and gadgets");

    // created_at must be an RFC 3339 timestamp
    let created_at = category["created_at"].as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(created_at).unwrap();
}

#[tokio::test]
async fn find_by_id_returns_saved_category() {
    let server = start().await;

    let body = serde_json::json!({"name": "books", "description": "printed matter"});
    let created: serde_json::Value = server
        .client()
        .post(server.url("/api/v1/categories"))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let id = created["id"].as_str().unwrap();
    let resp = server
        .client()
        .get(server.url(&format!("/api/v1/categories/{id}")))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let found: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn find_all_returns_every_saved_category() {
    let server = start().await;

    for name in ["electronics", "books"] {
        let body = serde_json::json!({"name": name, "description": format!("{name} description")});
        let resp = server
            .client()
            .post(server.url("/api/v1/categories"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let resp = server.client().get(server.url("/api/v1/categories")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let all: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn missing_category_yields_normalized_api_error() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/api/v1/categories/123456"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["statusCode"], "INVALID_REQUEST");
    assert_eq!(body["message"], "Category not found with this id: 123456");
    assert_eq!(body["path"], "uri=/api/v1/categories/123456");
}

#[tokio::test]
async fn blank_fields_yield_aggregated_validation_error() {
    let server = start().await;

    let body = serde_json::json!({"name": "", "description": ""});
    let resp = server
        .client()
        .post(server.url("/api/v1/categories"))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["statusCode"], "INVALID_REQUEST");
    assert_eq!(body["path"], "uri=/api/v1/categories");
    assert_eq!(body["errors"]["name"], "must not be blank");
    assert_eq!(body["errors"]["description"], "must not be blank");
}

#[tokio::test]
async fn repeated_failing_requests_get_identical_bodies() {
    let server = start().await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let resp = server
            .client()
            .get(server.url("/api/v1/categories/123456"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        bodies.push(resp.json::<serde_json::Value>().await.unwrap());
    }

    assert_eq!(bodies[0], bodies[1]);
}
