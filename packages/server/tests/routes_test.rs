//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use masking::{Analyzer, AnalyzerConfig, MockGenerator, TextGenerator};
use serde_json::{json, Value};
use server_core::server::{build_app, AppOptions};
use tower::ServiceExt;

const TABLE_REPLY: &str = "| Original Word | Masking Reason | Suggested Replacement |\n\
                           |---|---|---|\n\
                           | Elon Musk | Person's name | [NAME] |\n\
                           | Tesla | Organization | [ORGANIZATION] |\n\n";

fn app_with(generator: MockGenerator, options: AppOptions) -> Router {
    build_app(Arc::new(Analyzer::new(generator)), options)
}

async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_analyze_with_model_table() {
    let app = app_with(
        MockGenerator::new().with_response(TABLE_REPLY),
        AppOptions::default(),
    );

    let (status, body) = post_json(
        app,
        json!({ "text": "Elon Musk is the CEO of Tesla, which is based in Austin, Texas." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["masked_text"],
        "[NAME] is the CEO of [ORGANIZATION], which is based in Austin, Texas."
    );
    assert_eq!(body["source"], "model");
    assert_eq!(body["table"][0]["original"], "Elon Musk");
    assert_eq!(body["table"][1]["replacement"], "[ORGANIZATION]");
    assert!(body["table_markdown"]
        .as_str()
        .unwrap()
        .contains("| Elon Musk | Person's name | [NAME] |"));
    assert!(body["table_html"].as_str().unwrap().contains("<table>"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_analyze_falls_back_when_model_fails() {
    let app = app_with(
        MockGenerator::new().with_failure("connection refused"),
        AppOptions::default(),
    );

    let (status, body) = post_json(app, json!({ "text": "My SSN is 123-45-6789." })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert!(body["masked_text"].as_str().unwrap().contains("[SSN]"));
}

#[tokio::test]
async fn test_missing_text_is_empty() {
    let app = app_with(
        MockGenerator::new().with_failure("unreachable"),
        AppOptions::default(),
    );

    let (status, body) = post_json(app, json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["masked_text"], "");
    assert_eq!(body["table"], json!([]));
}

#[tokio::test]
async fn test_error_field_when_fallback_disabled() {
    let analyzer = Analyzer::with_config(
        MockGenerator::new().with_failure("unreachable"),
        AnalyzerConfig::new().with_fallback(false),
    );
    let app = build_app(Arc::new(analyzer), AppOptions::default());

    let (status, body) = post_json(app, json!({ "text": "John Doe" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["masked_text"], "John Doe");
    assert_eq!(body["source"], "none");
    assert_eq!(body["error"], "Failed to analyze text with LLM");
}

#[tokio::test]
async fn test_health_reports_model() {
    let app = app_with(
        MockGenerator::new().with_model("llama3:8b"),
        AppOptions::default(),
    );

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok", "model": "llama3:8b" }));
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = app_with(MockGenerator::new(), AppOptions::default());

    let response = app
        .oneshot(preflight("chrome-extension://abcdef"))
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_list() {
    let options = AppOptions {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        request_timeout: None,
    };

    let allowed = app_with(MockGenerator::new(), options.clone())
        .oneshot(preflight("http://localhost:3000"))
        .await
        .unwrap();
    let denied = app_with(MockGenerator::new(), options)
        .oneshot(preflight("http://evil.example"))
        .await
        .unwrap();

    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

/// Generator that never answers in time.
struct SlowGenerator;

#[async_trait]
impl TextGenerator for SlowGenerator {
    async fn generate(&self, _prompt: &str) -> masking::Result<String> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(String::new())
    }

    fn model(&self) -> &str {
        "slow"
    }
}

#[tokio::test]
async fn test_request_timeout() {
    let options = AppOptions {
        allowed_origins: Vec::new(),
        request_timeout: Some(Duration::from_millis(50)),
    };
    let app = build_app(Arc::new(Analyzer::new(SlowGenerator)), options);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text":"John Doe"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
