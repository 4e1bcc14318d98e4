use anyhow::{Result, bail};
use qrgen_business::{BusinessConfig, GenerationRequest};
use tracing::debug;

use super::NOTHING_TO_ENCODE;

/// Builds the QR image URL, failing when there is nothing to encode.
pub fn run_url(config: &BusinessConfig, request: &GenerationRequest) -> Result<String> {
    let url = config.url_builder().build(request);
    if url.is_empty() {
        bail!(NOTHING_TO_ENCODE);
    }
    debug!(%url, "built QR image URL");
    Ok(url)
}
