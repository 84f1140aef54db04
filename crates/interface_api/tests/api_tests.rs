//! HTTP tests driving the router in-process

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_customer::RegistryService;
use infra_memory::InMemoryCustomerRepository;
use interface_api::{config::ApiConfig, create_router};
use test_utils::fixtures::CustomerFixtures;

fn app() -> Router {
    let repository = Arc::new(InMemoryCustomerRepository::with_customers(
        CustomerFixtures::seed(),
    ));
    create_router(
        Arc::new(RegistryService::new(repository)),
        ApiConfig::default(),
    )
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn person_json() -> Value {
    json!({
        "given_name": "given-name",
        "family_name": "family-name",
        "ssn": "SSN",
        "date_of_birth": "1970-01-01",
        "citizenship": "US"
    })
}

fn organization_json() -> Value {
    json!({
        "name": "org-name",
        "form": "Ltd",
        "legal_id": "legal-id",
        "registration_date": "1970-01-01",
        "registration_country": "US"
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["repository"]["status"], "healthy");
}

#[tokio::test]
async fn test_get_seeded_customer() {
    let (status, body) = send(app(), Method::GET, "/api/v1/customers/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["state"], "active");
    assert_eq!(body["state_code"], 2);
    assert_eq!(body["customer_type"], "organization");
    assert_eq!(body["organization"]["name"], "org-name");
    assert!(body.get("person").is_none());
}

#[tokio::test]
async fn test_get_unknown_customer_is_404() {
    let (status, body) = send(app(), Method::GET, "/api/v1/customers/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_with_malformed_id_is_400() {
    let (status, body) = send(app(), Method::GET, "/api/v1/customers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_person_with_random_id() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/v1/customers",
        Some(json!({ "person": person_json() })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["id"], 0);
    assert_eq!(body["state_code"], 1);
    assert_eq!(body["person"], person_json());
}

#[tokio::test]
async fn test_create_with_requested_id_then_get() {
    let app = app();
    let (status, _) = send(
        app.clone(),
        Method::POST,
        "/api/v1/customers",
        Some(json!({ "id": 77, "organization": organization_json() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, Method::GET, "/api/v1/customers/77", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_name"], "org-name Ltd");
}

#[tokio::test]
async fn test_create_with_taken_id_is_500() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/v1/customers",
        Some(json!({ "id": 1, "person": person_json() })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "UNEXPECTED");
    assert_eq!(body["message"], "internal error");
}

#[tokio::test]
async fn test_create_with_both_kinds_is_400() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/v1/customers",
        Some(json!({ "person": person_json(), "organization": organization_json() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_with_malformed_body_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/customers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"person\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_invalid_country_is_422_with_details() {
    let mut person = person_json();
    person["citizenship"] = json!("EUR");

    let (status, body) = send(
        app(),
        Method::POST,
        "/api/v1/customers",
        Some(json!({ "person": person })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "VALIDATION_FAILED");
    assert_eq!(body["details"][0]["field"], "citizenship");
    assert_eq!(body["details"][0]["rule"], "iso3166_1_alpha2");
}

#[tokio::test]
async fn test_update_info_with_other_kind_is_409() {
    let app = app();
    let (status, body) = send(
        app.clone(),
        Method::PUT,
        "/api/v1/customers/1/info",
        Some(json!({ "organization": organization_json() })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "EXPECTED_CONFLICT");

    let (_, body) = send(app, Method::GET, "/api/v1/customers/1", None).await;
    assert_eq!(body["person"], person_json());
}

#[tokio::test]
async fn test_update_info_same_kind() {
    let mut person = person_json();
    person["given_name"] = json!("Anna-Liisa");

    let (status, body) = send(
        app(),
        Method::PUT,
        "/api/v1/customers/1/info",
        Some(json!({ "person": person })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["person"]["given_name"], "Anna-Liisa");
}

#[tokio::test]
async fn test_set_state() {
    let app = app();
    let (status, body) = send(
        app.clone(),
        Method::PUT,
        "/api/v1/customers/1/state",
        Some(json!({ "state": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, body) = send(app, Method::GET, "/api/v1/customers/1", None).await;
    assert_eq!(body["state"], "active");
}

#[tokio::test]
async fn test_set_state_out_of_range_is_422() {
    let (status, body) = send(
        app(),
        Method::PUT,
        "/api/v1/customers/1/state",
        Some(json!({ "state": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "state");
}

#[tokio::test]
async fn test_set_state_unknown_customer_is_404() {
    let (status, _) = send(
        app(),
        Method::PUT,
        "/api/v1/customers/999/state",
        Some(json!({ "state": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_details() {
    let (status, body) = send(
        app(),
        Method::PUT,
        "/api/v1/customers/2/details",
        Some(json!({
            "addresses": [{
                "kind": "registered",
                "street": "Aleksanterinkatu 1",
                "postal_code": "00100",
                "city": "Helsinki",
                "country": "FI"
            }],
            "contacts": [{ "channel": "email", "value": "info@example.com", "is_primary": true }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["addresses"][0]["city"], "Helsinki");
    assert_eq!(body["contacts"][0]["is_primary"], true);
    assert_eq!(body["tax_info"], json!([]));
}

#[tokio::test]
async fn test_update_details_invalid_email_is_422() {
    let (status, body) = send(
        app(),
        Method::PUT,
        "/api/v1/customers/2/details",
        Some(json!({
            "contacts": [
                { "channel": "phone", "value": "+358912345" },
                { "channel": "email", "value": "nope" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "contacts[1].value");
    assert_eq!(body["details"][0]["rule"], "email");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/api/v1/customers/1")
        .header("x-request-id", "req-abc")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "req-abc");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
