use qrgen_business::{
    ActionKind, ActionOutcome, BusinessConfig, DirectorySink, GenerationRequest, download_qr_code,
};
use tracing::instrument;

/// Downloads the QR code PNG into `config.download_dir`.
#[instrument(skip_all, name = "download", fields(dir = %config.download_dir.display()))]
pub async fn run_download(config: &BusinessConfig, request: &GenerationRequest) -> ActionOutcome {
    let url = config.url_builder().build(request);
    let sink = DirectorySink::new(config.download_dir.clone());

    let result = download_qr_code(&url, &sink).await;
    ActionOutcome::new(ActionKind::Download, result)
}
