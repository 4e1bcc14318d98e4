pub mod colors;
pub mod platform;
pub mod spawn;
#[cfg(target_arch = "wasm32")]
pub mod web;
