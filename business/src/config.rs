use std::env::vars;
use std::path::PathBuf;

use log::info;
use serde::Deserialize;

use crate::url_builder::{QR_SERVER_ENDPOINT, UrlBuilder};

/// Runtime configuration shared by the UI and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Endpoint of the remote QR image service.
    pub qr_service_url: String,
    /// Where downloaded PNGs land on native targets.
    pub download_dir: PathBuf,
}

// Intermediate struct for deserializing environment variables, every field optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    qr_service_url: Option<String>,
    download_dir: Option<PathBuf>,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            qr_service_url: QR_SERVER_ENDPOINT.to_owned(),
            download_dir: default_download_dir(),
        }
    }
}

impl BusinessConfig {
    /// Configuration pointing at a mock server, e.g. `wiremock`'s `uri()`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/');
        Self {
            qr_service_url: format!("{base_url}/v1/create-qr-code/"),
            ..Self::default()
        }
    }

    /// Reads `QR_SERVICE_URL` and `DOWNLOAD_DIR`, falling back to defaults.
    pub fn from_env() -> Self {
        let raw: Result<RawConfig, _> = serde_env::from_iter(vars());
        match raw {
            Ok(raw) => Self::from_raw(raw),
            Err(err) => {
                log::warn!("Ignoring unreadable environment configuration: {err}");
                Self::default()
            }
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            qr_service_url,
            download_dir,
        } = raw;

        let qr_service_url = match qr_service_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                info!("Using provided QR_SERVICE_URL: {url}");
                url
            }
            None => QR_SERVER_ENDPOINT.to_owned(),
        };

        let download_dir = match download_dir {
            Some(dir) => {
                info!("Using provided DOWNLOAD_DIR: {}", dir.display());
                dir
            }
            None => default_download_dir(),
        };

        Self {
            qr_service_url,
            download_dir,
        }
    }

    pub fn url_builder(&self) -> UrlBuilder {
        UrlBuilder::new(self.qr_service_url.clone())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(target_arch = "wasm32")]
fn default_download_dir() -> PathBuf {
    // Browsers pick the location themselves.
    PathBuf::new()
}
