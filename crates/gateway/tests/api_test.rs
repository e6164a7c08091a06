//! Router-level tests.
//!
//! The router runs against a real credential store (SQLite in memory) and
//! the real authenticator; only the upstream generator is mocked.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_service_lib::{Authenticator, JwtService};
use common::{CorsConfig, DatabaseConfig, JwtConfig};
use gateway_lib::{routes::create_router, state::AppState};
use generation_service_lib::{Generation, MockContentGenerator};
use user_service_lib::{infra::Database, UserStore};

const SECRET: &str = "integration-test-secret-0123456789abcdef";

async fn app_with(generator: MockContentGenerator) -> Router {
    let db = Database::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    })
    .await
    .unwrap();

    let users = Arc::new(UserStore::new(db.get_connection()));
    let auth = Arc::new(Authenticator::new(
        users.clone(),
        JwtService::new(&JwtConfig {
            secret: SECRET.to_string(),
            expiration_hours: 24,
        })
        .unwrap(),
    ));

    let state = AppState::new(auth, Arc::new(generator), users);
    create_router(state, &CorsConfig::default())
}

async fn app() -> Router {
    app_with(MockContentGenerator::new()).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn register(app: &Router, username: &str, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/auth/register",
            json!({"username": username, "email": email, "password": password}),
        ),
    )
    .await
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json("/api/auth/login", json!({"email": email, "password": password})),
    )
    .await
}

// =============================================================================
// Registration & login
// =============================================================================

#[tokio::test]
async fn test_register_then_login() {
    let app = app().await;

    let (status, body) = register(&app, "alice", "a@x.com", "hunter22").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully!");

    let (status, body) = login(&app, "a@x.com", "hunter22").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Login successful! Use this token for Authorization header: Bearer <token>"
    );
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let app = app().await;
    register(&app, "alice", "a@x.com", "hunter22").await;

    let (status, body) = register(&app, "bob", "a@x.com", "hunter23").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_duplicate_username_rejected_even_with_new_email() {
    let app = app().await;
    register(&app, "alice", "a@x.com", "hunter22").await;

    let (status, body) = register(&app, "alice", "other@x.com", "hunter22").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DUPLICATE_USERNAME");
}

#[tokio::test]
async fn test_register_validation() {
    let app = app().await;

    let (status, body) = register(&app, "alice", "a@x.com", "short").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = register(&app, "   ", "a@x.com", "hunter22").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = register(&app, "alice", "not-an-email", "hunter22").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, post_json("/api/auth/register", json!({"username": "alice"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email() {
    let app = app().await;
    register(&app, "alice", "a@x.com", "hunter22").await;

    let (status, body) = login(&app, "a@x.com", "wrong-pass").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = login(&app, "nobody@x.com", "hunter22").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_non_email_identifier_is_unauthorized() {
    let app = app().await;
    register(&app, "alice", "a@x.com", "hunter22").await;

    let (status, body) = login(&app, "alice", "hunter22").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, body) = login(&app, "  ", "hunter22").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Current user
// =============================================================================

#[tokio::test]
async fn test_me_with_token() {
    let app = app().await;
    register(&app, "alice", "a@x.com", "hunter22").await;
    let (_, body) = login(&app, "a@x.com", "hunter22").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get("/api/users/me", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["roles"], json!(["ROLE_USER"]));
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_rejects_missing_and_bad_tokens() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/users/me", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");

    let (status, body) = send(&app, get("/api/users/me", Some("not.a.token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");

    let foreign = JwtService::new(&JwtConfig {
        secret: "some-other-secret-0123456789abcdefgh".to_string(),
        expiration_hours: 1,
    })
    .unwrap()
    .issue("a@x.com", vec!["ROLE_USER".to_string()])
    .unwrap();
    let (status, _) = send(&app, get("/api/users/me", Some(&foreign.token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Generation
// =============================================================================

#[tokio::test]
async fn test_generate_returns_output() {
    let mut generator = MockContentGenerator::new();
    generator
        .expect_generate()
        .withf(|content, content_type| content == "cats" && content_type == "blog")
        .times(1)
        .returning(|_, _| Generation::Generated("Cats rule.".to_string()));
    let app = app_with(generator).await;

    let (status, body) = send(
        &app,
        post_json("/api/generate", json!({"content": "cats", "type": "blog"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"output": "Cats rule."}));
}

#[tokio::test]
async fn test_generate_upstream_failure_is_still_ok() {
    let mut generator = MockContentGenerator::new();
    generator
        .expect_generate()
        .returning(|_, _| Generation::UpstreamFailed);
    let app = app_with(generator).await;

    let (status, body) = send(
        &app,
        post_json("/api/generate", json!({"content": "cats", "type": "blog"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "Could not generate content (API error).");
}

#[tokio::test]
async fn test_generate_empty_answer() {
    let mut generator = MockContentGenerator::new();
    generator.expect_generate().returning(|_, _| Generation::Empty);
    let app = app_with(generator).await;

    let (_, body) = send(
        &app,
        post_json("/api/generate", json!({"content": "cats", "type": "faq"})),
    )
    .await;
    assert_eq!(body["output"], "No content generated.");
}

#[tokio::test]
async fn test_generate_blank_fields_never_reach_upstream() {
    let mut generator = MockContentGenerator::new();
    generator.expect_generate().never();
    let app = app_with(generator).await;

    for body in [
        json!({"content": "", "type": "blog"}),
        json!({"content": "cats", "type": "  "}),
        json!({"content": "cats"}),
    ] {
        let (status, json) = send(&app, post_json("/api/generate", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_generate_needs_no_token() {
    let mut generator = MockContentGenerator::new();
    generator
        .expect_generate()
        .returning(|content, _| Generation::Generated(content.to_uppercase()));
    let app = app_with(generator).await;

    let (status, body) = send(
        &app,
        post_json("/api/generate", json!({"content": "cats", "type": "unknown-tag"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "CATS");
}

// =============================================================================
// Catalog, health, CORS
// =============================================================================

#[tokio::test]
async fn test_content_type_catalog() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/content-types", None)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 18);
    assert_eq!(entries[0]["tag"], "blog");
    assert_eq!(entries[0]["category"], "professional");
}

#[tokio::test]
async fn test_health() {
    let app = app().await;

    let (status, body) = send(&app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = app().await;

    let preflight = |origin: &str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/generate")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    };

    let response = app
        .clone()
        .oneshot(preflight("https://ai-content-generation-app-pr-7.vercel.app"))
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://ai-content-generation-app-pr-7.vercel.app"
    );

    let response = app
        .clone()
        .oneshot(preflight("https://evil.example.com"))
        .await
        .unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
