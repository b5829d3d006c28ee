//! End-to-end tests for the HTTP surface backed by a mocked model sidecar.
//!
//! A single mock server stands in for every sidecar capability; the real pipeline service
//! and router run on top of it. Configuration is installed once for the whole test binary.

use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use docdigest::{
    api::create_router,
    config::{CONFIG, Config},
    pipeline::PipelineService,
};
use httpmock::{Method::POST, MockServer};
use serde_json::json;
use tokio::sync::OnceCell;
use tower::ServiceExt;

static SIDECAR: OnceCell<&'static MockServer> = OnceCell::const_new();

async fn init_sidecar() -> &'static MockServer {
    SIDECAR
        .get_or_init(|| async {
            let server: &'static MockServer = Box::leak(Box::new(MockServer::start_async().await));

            server
                .mock_async(|when, then| {
                    when.method(POST).path("/summarize");
                    then.status(200).json_body(json!({
                        "summary": "Acme Corp agreed under Section 12. All terms hold."
                    }));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path("/entities");
                    then.status(200).json_body(json!({
                        "entities": [
                            { "text": "Acme Corp", "label": "ORG" },
                            { "text": "twelve", "label": "CARDINAL" }
                        ]
                    }));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path("/sentiment");
                    then.status(200).json_body(json!({ "polarity": 0.25 }));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path("/translate");
                    then.status(200)
                        .json_body(json!({ "translation": "resumen traducido" }));
                })
                .await;
            server
                .mock_async(|when, then| {
                    when.method(POST).path("/answer");
                    then.status(200).json_body(json!({ "answer": "Acme Corp" }));
                })
                .await;

            let _ = CONFIG.set(Config {
                model_server_url: server.base_url(),
                max_chunk_chars: 1000,
                summary_max_length: 150,
                summary_min_length: 50,
                ocr_dpi: 300,
                ocr_language: "eng".into(),
                pdfium_lib_dir: None,
                server_port: None,
            });

            server
        })
        .await
}

const BOUNDARY: &str = "http-api-test";

fn upload_request(uri: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}

async fn json_of(response: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("json body")
}

#[tokio::test]
async fn summarize_produces_highlighted_annotated_digest() {
    init_sidecar().await;
    let app = create_router(Arc::new(PipelineService::new()));

    let response = app
        .oneshot(upload_request(
            "/summarize",
            "agreement.txt",
            b"Acme Corp and the tenant signed the agreement under Section 12.",
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_of(response).await;
    assert_eq!(
        json["summary"],
        "<b>Acme Corp</b> agreed under Section 12. All terms hold."
    );
    assert_eq!(
        json["bullets"],
        "• Acme Corp agreed under Section 12.\n• All terms hold."
    );
    assert_eq!(
        json["faq"],
        "Q: What is this document about?\nA: Acme Corp agreed under Section 12. All terms hold."
    );
    assert_eq!(json["keywords"], json!(["Acme Corp"]));
    assert_eq!(json["citations"], json!(["Section 12"]));
    assert_eq!(json["readability_score"], 0.25);
}

#[tokio::test]
async fn summarize_translates_when_language_is_not_english() {
    init_sidecar().await;
    let app = create_router(Arc::new(PipelineService::new()));

    let response = app
        .oneshot(upload_request(
            "/summarize?language=es",
            "agreement.txt",
            b"Acme Corp signed the agreement.",
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_of(response).await;
    assert_eq!(json["summary"], "resumen traducido");
    // Bullets and FAQ framing stay in the source language.
    assert_eq!(
        json["bullets"],
        "• Acme Corp agreed under Section 12.\n• All terms hold."
    );
}

#[tokio::test]
async fn empty_document_is_a_degenerate_but_valid_result() {
    init_sidecar().await;
    let app = create_router(Arc::new(PipelineService::new()));

    let response = app
        .oneshot(upload_request("/summarize", "empty.txt", b""))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_of(response).await;
    assert_eq!(json["summary"], "");
    assert_eq!(json["bullets"], "");
    assert_eq!(json["faq"], "");
    assert_eq!(json["citations"], json!([]));
}

#[tokio::test]
async fn ask_answers_against_the_uploaded_document() {
    init_sidecar().await;
    let app = create_router(Arc::new(PipelineService::new()));

    let response = app
        .oneshot(upload_request(
            "/ask?question=Who%20signed%20the%20agreement%3F",
            "agreement.txt",
            b"Acme Corp and the tenant signed the agreement.",
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_of(response).await;
    assert_eq!(json["question"], "Who signed the agreement?");
    assert_eq!(json["answer"], "Acme Corp");
}

#[tokio::test]
async fn metrics_reflect_processed_documents() {
    init_sidecar().await;
    let app = create_router(Arc::new(PipelineService::new()));

    let response = app
        .clone()
        .oneshot(upload_request(
            "/summarize",
            "agreement.txt",
            b"Acme Corp signed.",
        ))
        .await
        .expect("summarize response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/metrics")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("metrics response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_of(response).await;
    assert_eq!(json["documents_summarized"], 1);
    assert_eq!(json["chunks_summarized"], 1);
    assert_eq!(json["questions_answered"], 0);
}
