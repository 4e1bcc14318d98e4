//! CLI command tests against a mock QR image service.
//!
//! These call the command functions directly rather than spawning the binary.

#![cfg(not(target_arch = "wasm32"))]

use std::fs;

use qrgen_business::{
    ActionError, ActionKind, ActionReport, BusinessConfig, ErrorCorrection, GenerationRequest,
    QrSize, notifications,
};
use qrgen_cli::commands::{NOTHING_TO_ENCODE, report_outcome, run_copy, run_download, run_url};
use qrgen_cli::output::Output;
use qrgen_clipboard::MemoryClipboard;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Test context for CLI command tests.
struct CliTestContext {
    mock_server: MockServer,
    config: BusinessConfig,
    out_dir: tempfile::TempDir,
}

impl CliTestContext {
    async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let out_dir = tempfile::tempdir().expect("tempdir");

        let mut config = BusinessConfig::new(mock_server.uri());
        config.download_dir = out_dir.path().to_path_buf();

        Self {
            mock_server,
            config,
            out_dir,
        }
    }

    async fn mount_png(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/v1/create-qr-code/"))
            .respond_with(
                ResponseTemplate::new(status)
                    .insert_header("content-type", "image/png")
                    .set_body_bytes(PNG_BYTES),
            )
            .mount(&self.mock_server)
            .await;
    }

    fn saved_files(&self) -> Vec<String> {
        fs::read_dir(self.out_dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect()
    }
}

fn request(payload: &str) -> GenerationRequest {
    GenerationRequest::builder()
        .payload(payload)
        .size(QrSize::new(300))
        .error_correction(ErrorCorrection::Q)
        .foreground_color("#112233")
        .build()
}

#[tokio::test]
async fn test_url_command_builds_against_configured_endpoint() {
    let ctx = CliTestContext::new().await;

    let url = run_url(&ctx.config, &request("hello world")).expect("url");

    assert!(url.starts_with(&format!("{}/v1/create-qr-code/?", ctx.mock_server.uri())));
    assert!(url.contains("data=hello%20world"));
    assert!(url.contains("size=300x300"));
    assert!(url.contains("color=112233"));
    assert!(url.contains("ecc=Q"));
    assert!(url.ends_with("format=png"));
}

#[tokio::test]
async fn test_url_command_rejects_empty_payload() {
    let ctx = CliTestContext::new().await;

    let err = run_url(&ctx.config, &request("  ")).expect_err("empty payload");
    assert_eq!(err.to_string(), NOTHING_TO_ENCODE);
}

#[tokio::test]
async fn test_download_command_saves_png() {
    let ctx = CliTestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/v1/create-qr-code/"))
        .and(query_param("data", "hello"))
        .and(query_param("size", "300x300"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let outcome = run_download(&ctx.config, &request("hello")).await;

    assert_eq!(outcome.kind, ActionKind::Download);
    assert_eq!(outcome.notification(), Some(notifications::DOWNLOADED));
    let Ok(ActionReport::Downloaded(saved)) = &outcome.result else {
        panic!("expected a download, got {:?}", outcome.result);
    };
    assert_eq!(ctx.saved_files(), vec![saved.file_name.clone()]);
    assert_eq!(
        fs::read(ctx.out_dir.path().join(&saved.file_name)).expect("read"),
        PNG_BYTES
    );
    assert!(report_outcome(&Output::stderr(), &outcome).is_ok());
}

#[tokio::test]
async fn test_download_command_failure_exits_with_error() {
    let ctx = CliTestContext::new().await;
    ctx.mount_png(404).await;

    let outcome = run_download(&ctx.config, &request("hello")).await;

    assert!(matches!(
        outcome.result,
        Err(ActionError::Failed {
            action: ActionKind::Download,
            ..
        })
    ));
    assert_eq!(outcome.notification(), Some(notifications::DOWNLOAD_FAILED));
    assert!(ctx.saved_files().is_empty());
    assert!(report_outcome(&Output::stderr(), &outcome).is_err());
}

#[tokio::test]
async fn test_download_command_with_empty_payload_sends_nothing() {
    let ctx = CliTestContext::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES))
        .expect(0)
        .mount(&ctx.mock_server)
        .await;

    let outcome = run_download(&ctx.config, &request("")).await;

    assert_eq!(outcome.result, Err(ActionError::EmptyInput));
    assert!(outcome.notification().is_none());
    assert!(ctx.saved_files().is_empty());
}

#[tokio::test]
async fn test_copy_command_writes_url() {
    let ctx = CliTestContext::new().await;
    let clipboard = MemoryClipboard::new();

    let outcome = run_copy(&ctx.config, &request("hello"), &clipboard).await;

    assert_eq!(outcome.notification(), Some(notifications::COPIED));
    let expected = run_url(&ctx.config, &request("hello")).expect("url");
    assert_eq!(clipboard.contents(), Some(expected));
}
