//! Axum host adapter tests: session slot, both reply modes, error mapping.

use std::sync::Arc;

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Router};
use http::header::CONTENT_TYPE;
use http::{Request, StatusCode};
use inertia_adapter::host::{inertia_session, Inertia, InertiaState};
use inertia_adapter::{
    BoxError, ConfigUpdate, Engine, InertiaConfig, Prop, Props, RenderError, TemplateRenderer,
    ViewContext,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Minimal stand-in for a real template engine.
struct StubRenderer;

impl TemplateRenderer for StubRenderer {
    fn render(&self, view: &str, context: &ViewContext) -> Result<String, BoxError> {
        Ok(format!(
            "<html data-view=\"{}\"><div id=\"app\" data-page='{}'></div></html>",
            view, context.page
        ))
    }
}

fn engine(with_renderer: bool) -> Engine {
    let engine = Engine::new(InertiaConfig::default());
    engine.update_config(ConfigUpdate::new().version("v1"));
    if with_renderer {
        engine.with_renderer(Arc::new(StubRenderer))
    } else {
        engine
    }
}

fn app(engine: Engine) -> Router {
    let state = InertiaState::new(Arc::new(engine));
    Router::new()
        .route("/users", get(users_index))
        .route("/layered", get(layered))
        .route("/twice", get(render_twice))
        .route("/string", get(render_as_string))
        .layer(middleware::from_fn_with_state(state.clone(), inertia_session))
        .with_state(state)
}

async fn users_index(inertia: Inertia) -> Result<Response, RenderError> {
    inertia.with_value("who", json!("team"))?;
    inertia
        .render(
            "Users/Index",
            Props::new().with("count", Prop::value(json!(3))),
        )
        .await
}

// Two extractions of the same request must share one session.
async fn layered(first: Inertia, second: Inertia) -> Result<Response, RenderError> {
    first.with_value("from_first", json!(1))?;
    second.render("Layered", Props::new()).await
}

async fn render_twice(inertia: Inertia) -> Result<Response, RenderError> {
    let _ = inertia.render("Twice", Props::new()).await?;
    match inertia.render("Twice", Props::new()).await {
        Err(RenderError::SessionConsumed) => {
            Ok((StatusCode::ACCEPTED, "slot consumed").into_response())
        }
        other => panic!("expected SessionConsumed, got {:?}", other.map(|_| ())),
    }
}

// Render-to-string path: the host forwards the output itself.
async fn render_as_string(inertia: Inertia) -> Result<Response, RenderError> {
    let output = inertia
        .render_to_string("Stringy", Props::new().with("n", Prop::value(json!(7))))
        .await?;
    Ok(([("x-rendered-as", "string")], output).into_response())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn protocol_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-inertia", "true")
        .header("x-inertia-version", "v1")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_protocol_reply_written_directly() {
    let (status, headers, body) = send(app(engine(true)), protocol_get("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get("x-inertia").unwrap(), "true");

    let page: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(page["component"], json!("Users/Index"));
    assert_eq!(page["props"], json!({"who": "team", "count": 3}));
    assert_eq!(page["url"], json!("/users"));
    assert_eq!(page["version"], json!("v1"));
}

#[tokio::test]
async fn test_document_reply_runs_template_renderer() {
    let request = Request::builder()
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app(engine(true)), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    assert!(body.starts_with("<html data-view=\"app\""));
    assert!(body.contains("Users/Index"));
}

#[tokio::test]
async fn test_document_reply_without_renderer_is_500() {
    let request = Request::builder()
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(app(engine(false)), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_session_slot_shared_across_extractions() {
    let (status, _, body) = send(app(engine(true)), protocol_get("/layered")).await;

    assert_eq!(status, StatusCode::OK);
    let page: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(page["props"]["from_first"], json!(1));
}

#[tokio::test]
async fn test_second_render_hits_consumed_slot() {
    let (status, _, body) = send(app(engine(true)), protocol_get("/twice")).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, "slot consumed");
}

#[tokio::test]
async fn test_render_to_string_returns_protocol_json() {
    let (status, headers, body) = send(app(engine(true)), protocol_get("/string")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get("x-rendered-as").unwrap(), "string");
    let page: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(page["component"], json!("Stringy"));
    assert_eq!(page["props"]["n"], json!(7));
}

#[tokio::test]
async fn test_render_to_string_returns_document_html() {
    let request = Request::builder()
        .uri("/string")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app(engine(true)), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get("x-rendered-as").unwrap(), "string");
    assert!(body.starts_with("<html data-view=\"app\""));
    assert!(body.contains("Stringy"));
}

#[tokio::test]
async fn test_version_conflict_end_to_end() {
    let request = Request::builder()
        .uri("/users")
        .header("x-inertia", "true")
        .header("x-inertia-version", "stale")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app(engine(true)), request).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(headers.get("x-inertia-location").unwrap(), "/users");
    assert!(body.is_empty());
}
