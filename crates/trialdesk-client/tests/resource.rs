use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use serde_json::{Value, json};

use trialdesk_client::error::ApiError;
use trialdesk_client::resource::ResourceClient;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn get_resolves_with_the_parsed_listing() {
    let app = Router::new().route(
        "/forms",
        get(|| async { Json(json!({ "forms": [{ "name": "vitals" }] })) }),
    );
    let client = ResourceClient::new(serve(app).await, "token");

    let value = client.get("/forms").await.unwrap();
    assert_eq!(value["forms"][0]["name"], json!("vitals"));
}

#[tokio::test]
async fn mutating_calls_carry_csrf_and_json_content_type() {
    let app = Router::new().route(
        "/forms",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let token = headers
                .get("x-csrf-token")
                .and_then(|v| v.to_str().ok());
            let content_type = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();

            if token != Some("secret") || !content_type.starts_with("application/json") {
                return (StatusCode::FORBIDDEN, Json(json!({})));
            }
            (StatusCode::OK, Json(body))
        }),
    );
    let client = ResourceClient::new(serve(app).await, "secret");

    let value = client.post("/forms", &json!({ "name": "vitals" })).await.unwrap();
    assert_eq!(value["name"], json!("vitals"));
}

#[tokio::test]
async fn empty_success_body_resolves_to_null() {
    let app = Router::new().route("/forms/1", delete(|| async { StatusCode::NO_CONTENT }));
    let client = ResourceClient::new(serve(app).await, "token");

    let value = client.delete("/forms/1").await.unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn validation_response_classifies_as_validation() {
    let app = Router::new().route(
        "/patients",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "validation_errors": { "pid": ["Required"] } })),
            )
        }),
    );
    let client = ResourceClient::new(serve(app).await, "token");

    let error = client.post("/patients", &json!({})).await.unwrap_err();
    match error {
        ApiError::Validation(errors) => assert_eq!(errors["pid"], vec!["Required"]),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn csrf_rejection_classifies_as_session_expired() {
    let app = Router::new().route(
        "/patients",
        post(|| async { (StatusCode::BAD_REQUEST, "400 Bad CSRF Token") }),
    );
    let client = ResourceClient::new(serve(app).await, "stale");

    let error = client.post("/patients", &json!({})).await.unwrap_err();
    assert!(matches!(error, ApiError::SessionExpired));
}

#[tokio::test]
async fn server_error_classifies_as_status() {
    let app = Router::new().route(
        "/studies",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = ResourceClient::new(serve(app).await, "token");

    let error = client.get("/studies").await.unwrap_err();
    assert!(matches!(error, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_server_classifies_as_network() {
    // grab a free port, then close it so the connect is refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ResourceClient::new(format!("http://{addr}"), "token");
    let error = client.get("/forms").await.unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_normalized() {
    let app = Router::new().route("/forms", get(|| async { Json(json!({ "forms": [] })) }));
    let base = format!("{}/", serve(app).await);
    let client = ResourceClient::new(base, "token");

    assert!(client.get("/forms").await.is_ok());
}
