//! End-to-end API tests: real router, SQLite in a temp dir, Brevo mocked.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use storefront::config::AppConfig;
use storefront::infrastructure::database::Migrator;
use storefront::server::build_router;
use storefront::{init_database, DatabaseConfig};

struct TestApp {
    router: Router,
    _dir: TempDir,
}

impl TestApp {
    async fn start(mail_base_url: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront-test.db");
        let db = init_database(&DatabaseConfig::sqlite(path.to_str().unwrap()))
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();

        let mut config = AppConfig::default();
        config.notification.brevo_base_url = mail_base_url.to_string();
        config.notification.brevo_api_key = "test-key".to_string();
        config.notification.timeout_secs = Some(5);

        Self {
            router: build_router(db, &config, None).unwrap(),
            _dir: dir,
        }
    }

    async fn without_mail() -> Self {
        Self::start("http://127.0.0.1:1").await
    }

    async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create_product(&self, name: &str, category: &str, brand: &str, price: f64) -> String {
        let (status, body) = self
            .call(
                "POST",
                "/product/create-product",
                Some(json!({
                    "name": name,
                    "price": price,
                    "quantity": 10.0,
                    "categoryId": category,
                    "brandId": brand
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["result"]["id"].as_str().unwrap().to_string()
    }
}

fn names(body: &Value) -> Vec<String> {
    body["result"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn default_listing_is_twenty_newest_products() {
    let app = TestApp::without_mail().await;
    for n in 0..25 {
        app.create_product(&format!("Product {n:02}"), "c1", "b1", n as f64)
            .await;
    }

    let (status, body) = app.call("GET", "/product/get-all-products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 1000);
    assert_eq!(body["result"]["totalPages"], 2);

    let expected: Vec<String> = (5..25).rev().map(|n| format!("Product {n:02}")).collect();
    assert_eq!(names(&body), expected);

    let (_, body) = app
        .call("GET", "/product/get-all-products?page=1", None)
        .await;
    assert_eq!(names(&body).len(), 5);
}

#[tokio::test]
async fn only_asc_sorts_ascending() {
    let app = TestApp::without_mail().await;
    for n in 0..3 {
        app.create_product(&format!("Product {n:02}"), "c1", "b1", n as f64)
            .await;
    }

    let (_, body) = app
        .call(
            "GET",
            "/product/get-all-products?sortBy=price&sortDirection=ASC",
            None,
        )
        .await;
    assert_eq!(names(&body), ["Product 00", "Product 01", "Product 02"]);

    let (_, body) = app
        .call(
            "GET",
            "/product/get-all-products?sortBy=price&sortDirection=Ascending",
            None,
        )
        .await;
    assert_eq!(names(&body), ["Product 02", "Product 01", "Product 00"]);
}

#[tokio::test]
async fn category_and_brand_listings_are_scoped() {
    let app = TestApp::without_mail().await;
    app.create_product("Lipstick", "makeup", "acme", 9.5).await;
    app.create_product("Mascara", "makeup", "globex", 12.0).await;
    app.create_product("Shampoo", "hair", "acme", 5.0).await;

    let (_, body) = app
        .call("GET", "/product/category/makeup?sortBy=name&sortDirection=asc", None)
        .await;
    assert_eq!(names(&body), ["Lipstick", "Mascara"]);
    assert_eq!(body["result"]["totalPages"], 1);

    let (_, body) = app
        .call("GET", "/product/brand/acme?sortBy=name&sortDirection=asc", None)
        .await;
    assert_eq!(names(&body), ["Lipstick", "Shampoo"]);

    let (status, body) = app.call("GET", "/product/category/nope", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&body).is_empty());
    assert_eq!(body["result"]["totalPages"], 0);
}

#[tokio::test]
async fn page_far_past_the_end_is_empty() {
    let app = TestApp::without_mail().await;
    for n in 0..3 {
        app.create_product(&format!("Product {n:02}"), "c1", "b1", n as f64)
            .await;
    }

    let (status, body) = app
        .call(
            "GET",
            "/product/get-all-products?page=9223372036854775807&limit=2",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&body).is_empty());
    assert_eq!(body["result"]["totalPages"], 2);

    let (status, body) = app
        .call(
            "GET",
            "/product/get-all-products?page=18446744073709551615&limit=18446744073709551615",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&body).is_empty());
    assert_eq!(body["result"]["totalPages"], 1);
}

#[tokio::test]
async fn malformed_query_values_return_envelope() {
    let app = TestApp::without_mail().await;
    let id = app.create_product("Serum", "skin", "acme", 30.0).await;

    let (status, body) = app
        .call("GET", "/product/get-all-products?page=abc", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);

    let (status, body) = app
        .call("PUT", &format!("/product/{id}/quantity?newQuantity=lots"), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);

    let (status, body) = app.call("GET", "/order/user/alice?limit=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn product_lifecycle() {
    let app = TestApp::without_mail().await;
    let id = app.create_product("Serum", "skin", "acme", 30.0).await;

    let (status, _) = app
        .call("PUT", &format!("/product/{id}/quantity?newQuantity=2.5"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .call(
            "PUT",
            &format!("/product/update-product/{id}"),
            Some(json!({"price": 27.0})),
        )
        .await;
    assert_eq!(body["result"]["price"], 27.0);
    assert_eq!(body["result"]["quantity"], 2.5);
    assert_eq!(body["result"]["name"], "Serum");

    let (status, _) = app
        .call("DELETE", &format!("/product/delete-product/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.call("GET", &format!("/product/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn invalid_product_body_is_rejected() {
    let app = TestApp::without_mail().await;

    let (status, body) = app
        .call(
            "POST",
            "/product/create-product",
            Some(json!({"name": "", "price": -1.0, "categoryId": "c", "brandId": "b"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn orders_are_listed_per_user_and_status_updates() {
    let app = TestApp::without_mail().await;
    let order = |user: &str| {
        json!({
            "userId": user,
            "items": [
                {"productId": "p1", "productName": "Lipstick", "unitPrice": 10.0, "quantity": 2.0},
                {"productId": "p2", "productName": "Mascara", "unitPrice": 5.5, "quantity": 1.0}
            ],
            "shippingAddress": "1 Main St"
        })
    };

    let (status, body) = app
        .call("POST", "/order/create-order", Some(order("alice")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["totalAmount"], 25.5);
    assert_eq!(body["result"]["status"], "PENDING");
    let id = body["result"]["id"].as_str().unwrap().to_string();
    app.call("POST", "/order/create-order", Some(order("bob"))).await;

    let (_, body) = app.call("GET", "/order/user/alice", None).await;
    let orders = body["result"]["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["items"].as_array().unwrap().len(), 2);

    let (_, body) = app
        .call(
            "PUT",
            &format!("/order/update-order/{id}"),
            Some(json!({"status": "shipped"})),
        )
        .await;
    assert_eq!(body["result"]["status"], "SHIPPED");

    let (status, body) = app
        .call(
            "PUT",
            &format!("/order/update-order/{id}"),
            Some(json!({"status": "lost"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn duplicate_profile_is_a_conflict() {
    let app = TestApp::without_mail().await;
    let profile = json!({"username": "alice", "email": "alice@example.com", "age": 30});

    let (status, body) = app
        .call("POST", "/identity/create-profile", Some(profile.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["result"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .call("POST", "/identity/create-profile", Some(profile))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 1002);

    let (_, body) = app
        .call(
            "PUT",
            &format!("/identity/update-profile/{id}"),
            Some(json!({"occupation": "student", "dob": "1995-04-12"})),
        )
        .await;
    assert_eq!(body["result"]["occupation"], "student");
    assert_eq!(body["result"]["dob"], "1995-04-12");
    assert_eq!(body["result"]["username"], "alice");

    let (_, body) = app.call("GET", "/identity/get-all-profiles", None).await;
    assert_eq!(body["result"]["profiles"].as_array().unwrap().len(), 1);
    assert_eq!(body["result"]["totalPages"], 1);
}

#[tokio::test]
async fn email_is_relayed_to_provider() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v3/smtp/email")
                .json_body(json!({
                    "sender": {"name": "Study Tracker", "email": "no-reply@studytracker.app"},
                    "to": [{"email": "a@b.com"}],
                    "subject": "hi",
                    "htmlContent": "<p>hi</p>"
                }));
            then.status(201)
                .json_body(json!({"messageId": "<42@relay>"}));
        })
        .await;
    let app = TestApp::start(&server.base_url()).await;

    let (status, body) = app
        .call(
            "POST",
            "/notification/email/send",
            Some(json!({"to": {"email": "a@b.com"}, "subject": "hi", "htmlContent": "<p>hi</p>"})),
        )
        .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["messageId"], "<42@relay>");
}

#[tokio::test]
async fn provider_401_becomes_cannot_send_email() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v3/smtp/email");
            then.status(401)
                .json_body(json!({"code": "unauthorized", "message": "Key not found"}));
        })
        .await;
    let app = TestApp::start(&server.base_url()).await;

    let (status, body) = app
        .call(
            "POST",
            "/notification/email/send",
            Some(json!({"to": {"email": "a@b.com"}, "subject": "hi", "htmlContent": "<p>hi</p>"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 1005);
    assert_eq!(body["message"], "Cannot send email");
}

#[tokio::test]
async fn unreachable_provider_becomes_cannot_send_email() {
    let app = TestApp::without_mail().await;

    let (status, body) = app
        .call(
            "POST",
            "/notification/email/send",
            Some(json!({"to": {"email": "a@b.com"}, "subject": "hi", "htmlContent": "<p>hi</p>"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 1005);
    assert_eq!(body["message"], "Cannot send email");
}

#[tokio::test]
async fn short_username_is_rejected() {
    let app = TestApp::without_mail().await;

    let (status, body) = app
        .call(
            "POST",
            "/identity/create-profile",
            Some(json!({"username": "al", "email": "al@example.com", "age": 30})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 1001);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("username must be 3 to 50 characters"));
}

#[tokio::test]
async fn health_and_request_id() {
    let app = TestApp::without_mail().await;

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "trace-me");
}
