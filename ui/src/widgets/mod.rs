mod action_buttons;
mod form;
mod preview;
pub mod toasts;

pub use action_buttons::action_buttons;
pub use form::generation_form;
pub use preview::qr_preview;
pub use toasts::{Toast, Toasts, toasts};
