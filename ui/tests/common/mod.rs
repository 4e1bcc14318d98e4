use std::fs;
use std::sync::Arc;

use egui_kittest::Harness;
use qrgen_business::{BusinessConfig, DirectorySink};
use qrgen_clipboard::MemoryClipboard;
use qrgen_ui::QrGenApp;
use qrgen_ui::state::State;
use qrgen_ui::utils::platform::Capabilities;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused)]
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// The body every mock answers with, as an image response.
#[allow(unused)]
pub fn png_response(status_code: u16) -> ResponseTemplate {
    ResponseTemplate::new(status_code)
        .insert_header("content-type", "image/png")
        .set_body_bytes(PNG_BYTES)
}

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    clipboard: Arc<MemoryClipboard>,
    download_dir: tempfile::TempDir,
    harness: Harness<'a, QrGenApp>,
}

impl<'a> TestCtx<'a> {
    /// App wired to a mock QR service answering every request with `status_code`.
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::new_app_with_mocks(Vec::new(), status_code).await
    }

    pub async fn new_app() -> Self {
        Self::new_app_with_status(200).await
    }

    /// App whose mock QR service tries `mocks` first, then answers anything
    /// else (preview loads included) with `fallback_status`.
    pub async fn new_app_with_mocks(mocks: Vec<Mock>, fallback_status: u16) -> Self {
        let mock_server = MockServer::start().await;

        for mock in mocks {
            mock.mount(&mock_server).await;
        }
        Mock::given(method("GET"))
            .and(path("/v1/create-qr-code/"))
            .respond_with(png_response(fallback_status))
            .mount(&mock_server)
            .await;

        let download_dir = tempfile::tempdir().expect("tempdir");
        let clipboard = Arc::new(MemoryClipboard::new());

        let mut config = BusinessConfig::new(mock_server.uri());
        config.download_dir = download_dir.path().to_path_buf();
        let capabilities = Capabilities::builder()
            .clipboard(clipboard.clone())
            .download_sink(Arc::new(DirectorySink::new(config.download_dir.clone())))
            .build();

        let app = QrGenApp::new(State::new(config, capabilities));
        // Same window size as the native app (ui/src/main.rs).
        let harness = Harness::builder()
            .with_size(egui::Vec2::new(480.0, 800.0))
            .build_eframe(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                app
            });

        Self {
            _mock_server: mock_server,
            clipboard,
            download_dir,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, QrGenApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, QrGenApp> {
        &self.harness
    }

    /// Types `payload` into the form and renders a frame.
    pub fn enter_payload(&mut self, payload: &str) {
        self.harness.state_mut().state_mut().form.payload = payload.to_owned();
        self.harness.step();
    }

    pub fn current_url(&self) -> String {
        self.harness.state().state().qr_url()
    }

    #[allow(unused)]
    pub fn clipboard(&self) -> &MemoryClipboard {
        &self.clipboard
    }

    #[allow(unused)]
    pub fn download_dir(&self) -> &std::path::Path {
        self.download_dir.path()
    }

    #[allow(unused)]
    pub fn downloaded_files(&self) -> Vec<String> {
        fs::read_dir(self.download_dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect()
    }

    /// Bytes currently held by the image byte loaders (the HTTP cache among them).
    #[allow(unused)]
    pub fn cached_image_bytes(&self) -> usize {
        use egui::load::BytesLoader as _;

        let loaders = self.harness.ctx.loaders();
        let bytes = loaders.bytes.lock().iter().map(|l| l.byte_size()).sum::<usize>();
        bytes
    }

    /// Steps the app until `done` holds for the cached image bytes or ~5s pass.
    /// Returns the last observed size.
    #[allow(unused)]
    pub async fn wait_for_image_bytes(&mut self, done: impl Fn(usize) -> bool) -> usize {
        let mut bytes = self.cached_image_bytes();
        for _ in 0..50 {
            if done(bytes) {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
            self.harness.step();
            bytes = self.cached_image_bytes();
        }
        bytes
    }

    /// Steps the app until a label containing `text` shows up or ~5s pass.
    #[allow(unused)]
    pub async fn wait_for_label(&mut self, text: &str) -> bool {
        use kittest::Queryable;

        for _ in 0..50 {
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
            self.harness.step();
            if self.harness.query_by_label_contains(text).is_some() {
                return true;
            }
        }
        false
    }
}
