//! Fire-and-forget task spawning for UI actions.
//!
//! Native builds run on the tokio runtime entered in `main` (or the test's
//! runtime); web builds run on the browser's microtask queue.

use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(err) => log::error!("No async runtime available, dropping task: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
