#![forbid(unsafe_code)]
//! Browser entry point for the Carrel page enhancements.
//!
//! Binds the platform-agnostic logic in `carrel-page` to the live page:
//! `web-sys` adapters for the document, `localStorage` and `window.prompt`,
//! plus the `onclick` wiring for the greeting widget.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod greet;
pub mod prompt;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let doc = dom::WebDocument::new();
    carrel_page::styler::enhance(&doc);
    // The greeting widget needs the heading/image/button trio; pages
    // without it keep the styling pass and skip the widget.
    if let Err(err) = greet::mount(&doc) {
        dom::console_error(&format!(
            "greeting widget unavailable: {}",
            dom::js_error_message(&err)
        ));
    }
}
