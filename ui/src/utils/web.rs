//! Browser implementations of the download and share capabilities.

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use qrgen_business::{DownloadError, DownloadSink, SavedFile, ShareError, SharePayload, ShareSheet};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Object URL that is revoked when dropped, whatever happened in between.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, DownloadError> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|err| DownloadError::Platform(js_error(err)))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(err) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL: {}", js_error(err));
        }
    }
}

/// Saves through a temporary `<a download>` element, like a user clicking a link.
pub struct AnchorDownloadSink;

impl DownloadSink for AnchorDownloadSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<SavedFile, DownloadError> {
        let platform = |msg: &str| DownloadError::Platform(msg.to_owned());

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| platform("no document"))?;
        let body = document.body().ok_or_else(|| platform("no document body"))?;

        let parts = Array::of1(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|err| DownloadError::Platform(js_error(err)))?;
        let object_url = ObjectUrl::for_blob(&blob)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|err| DownloadError::Platform(js_error(err)))?
            .dyn_into()
            .map_err(|_| platform("created element is not an anchor"))?;
        anchor.set_href(object_url.as_str());
        anchor.set_download(file_name);

        body.append_child(&anchor)
            .map_err(|err| DownloadError::Platform(js_error(err)))?;
        anchor.click();
        anchor.remove();

        Ok(SavedFile {
            file_name: file_name.to_owned(),
            location: None,
        })
    }
}

/// Whether `navigator.share` exists in this browser.
pub fn share_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w.navigator(), &JsValue::from_str("share")).unwrap_or(false))
        .unwrap_or(false)
}

/// `navigator.share` wrapped as a [`ShareSheet`].
pub struct WebShareSheet;

#[async_trait]
impl ShareSheet for WebShareSheet {
    async fn share(&self, payload: SharePayload) -> Result<(), ShareError> {
        // JS futures are not Send; drive them on the local executor and
        // hand the result back over a channel.
        let (tx, rx) = flume::bounded::<Result<(), ShareError>>(1);

        wasm_bindgen_futures::spawn_local(async move {
            let result = navigator_share(&payload).await;
            drop(tx.send_async(result).await);
        });

        rx.recv_async()
            .await
            .map_err(|_| ShareError::Failed("share task dropped".to_owned()))?
    }
}

async fn navigator_share(payload: &SharePayload) -> Result<(), ShareError> {
    let failed = |err: JsValue| ShareError::Failed(js_error(err));

    let navigator = web_sys::window()
        .ok_or_else(|| ShareError::Failed("no window".to_owned()))?
        .navigator();
    let share: Function = Reflect::get(&navigator, &JsValue::from_str("share"))
        .map_err(failed)?
        .dyn_into()
        .map_err(|_| ShareError::Failed("navigator.share is not a function".to_owned()))?;

    let data = Object::new();
    for (key, value) in [
        ("title", &payload.title),
        ("text", &payload.text),
        ("url", &payload.url),
    ] {
        Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value)).map_err(failed)?;
    }

    let promise: Promise = share
        .call1(&navigator, &data)
        .map_err(share_error)?
        .dyn_into()
        .map_err(|_| ShareError::Failed("navigator.share did not return a promise".to_owned()))?;

    JsFuture::from(promise).await.map(|_| ()).map_err(share_error)
}

/// `AbortError` means the user closed the sheet.
fn share_error(err: JsValue) -> ShareError {
    let name = Reflect::get(&err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string());

    match name.as_deref() {
        Some("AbortError") => ShareError::Cancelled,
        Some(name) => ShareError::Failed(name.to_owned()),
        None => ShareError::Failed(js_error(err)),
    }
}
