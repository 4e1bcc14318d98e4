//! Maps a [`GenerationRequest`] onto the remote image service's URL.
//!
//! The builder is a pure function of its endpoint and the request: no I/O,
//! no clock, no randomness. The preview re-runs it every frame and relies on
//! identical input producing a byte-identical string.

use crate::GenerationRequest;

/// Public QR image endpoint.
pub const QR_SERVER_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Builds image-request URLs against one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    endpoint: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(QR_SERVER_ENDPOINT)
    }
}

impl UrlBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the image URL for `request`, or an empty string when the
    /// payload is blank.
    pub fn build(&self, request: &GenerationRequest) -> String {
        if !request.has_payload() {
            return String::new();
        }

        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        let dimensions = request.size.dimensions();
        let params = [
            ("data", urlencoding::encode(&request.payload)),
            ("size", urlencoding::encode(&dimensions)),
            (
                "color",
                urlencoding::encode(strip_hash(&request.foreground_color)),
            ),
            (
                "bgcolor",
                urlencoding::encode(strip_hash(&request.background_color)),
            ),
            ("ecc", request.error_correction.code().into()),
            ("format", "png".into()),
        ];

        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{separator}{query}", self.endpoint)
    }
}

/// The service expects bare hex digits.
fn strip_hash(color: &str) -> &str {
    let color = color.trim();
    color.strip_prefix('#').unwrap_or(color)
}
