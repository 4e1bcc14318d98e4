//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! The QR image service is only ever asked for one thing: a PNG over `GET`.
//! This module wraps that request so it works on both native and WASM targets.
//!
//! On WASM, `reqwest::Response` is not `Send` because it contains JS types
//! (`JsValue`, `JsFuture`, etc.) that are inherently single-threaded. So:
//! - On **native**: use reqwest directly (futures are Send)
//! - On **WASM**: spawn the HTTP request on the JS thread using `wasm_bindgen_futures::spawn_local`,
//!   then send the results back through a `flume` channel (which is Send-safe)
//!
//! Actions can therefore be spawned on a multi-threaded runtime natively and
//! with `spawn_local` on the web, without two code paths.

use std::collections::HashMap;

/// A simplified HTTP response that contains only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A builder for `GET` requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Send the request and return a Send-safe future.
    ///
    /// On native, this uses reqwest directly.
    /// On WASM, this spawns the request on the JS thread and returns results via a channel.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::execute(self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        // flume channels are Send-safe, so this future is Send
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

        let url = self.url;
        let headers = self.headers;

        // This closure is NOT Send, but spawn_local doesn't require Send
        wasm_bindgen_futures::spawn_local(async move {
            let result = Self::execute(url, headers).await;
            // Receiver may be gone if the caller was dropped; nothing to report then.
            drop(tx.send_async(result).await);
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }

    async fn execute(url: String, headers: HashMap<String, String>) -> HttpResult<Response> {
        let client = reqwest::Client::new();
        let mut request = client.get(&url);

        for (name, value) in &headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

/// HTTP client with Send-safe futures on all platforms.
///
/// # Example
///
/// ```ignore
/// use qrgen_business::http::Client;
///
/// async fn fetch_png(url: &str) {
///     let response = Client::get(url)
///         .header("Accept", "image/png")
///         .send()
///         .await
///         .unwrap();
///
///     if response.is_success() {
///         std::fs::write("qrcode.png", &response.body).unwrap();
///     }
/// }
/// ```
pub struct Client;

impl Client {
    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        let response = |status| Response {
            status,
            body: vec![],
        };

        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(304).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn test_http_error_display() {
        let err = HttpError::new("connection refused");
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod native_tests {
        use super::*;
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn test_get_sends_headers_and_returns_body() {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/v1/create-qr-code/"))
                .and(header("accept", "image/png"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .insert_header("content-type", "image/png")
                        .set_body_bytes(vec![0x89, b'P', b'N', b'G']),
                )
                .expect(1)
                .mount(&mock_server)
                .await;

            let response = Client::get(format!("{}/v1/create-qr-code/", mock_server.uri()))
                .header("Accept", "image/png")
                .send()
                .await
                .expect("request should succeed");

            assert!(response.is_success());
            assert_eq!(response.body, vec![0x89, b'P', b'N', b'G']);
        }

        #[tokio::test]
        async fn test_non_success_status_is_not_an_error() {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(503))
                .mount(&mock_server)
                .await;

            let response = Client::get(mock_server.uri())
                .send()
                .await
                .expect("transport should succeed");

            assert_eq!(response.status, 503);
            assert!(!response.is_success());
        }

        #[tokio::test]
        async fn test_unreachable_host_is_an_error() {
            // Port 9 (discard) on localhost is not expected to be listening.
            let result = Client::get("http://127.0.0.1:9/").send().await;
            assert!(result.is_err());
        }
    }
}
