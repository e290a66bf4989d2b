//! Browser document access and the `web-sys` bindings for the tree seam.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use carrel_page::tree::{DocumentTree, ElementHandle};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is
/// unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser
/// window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// The live page as a [`DocumentTree`].
pub struct WebDocument {
    doc: Document,
}

impl WebDocument {
    #[must_use]
    pub fn new() -> Self {
        Self { doc: document() }
    }
}

impl Default for WebDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a live DOM element.
#[derive(Clone)]
pub struct WebElement {
    el: Element,
}

impl WebElement {
    #[must_use]
    pub fn from_element(el: Element) -> Self {
        Self { el }
    }

    #[must_use]
    pub fn into_element(self) -> Element {
        self.el
    }
}

fn collect_matches(
    matched: Result<web_sys::NodeList, JsValue>,
    selector: &str,
) -> Vec<WebElement> {
    let Ok(list) = matched else {
        log::warn!("invalid selector `{selector}`");
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(WebElement { el });
        }
    }
    out
}

impl DocumentTree for WebDocument {
    type El = WebElement;

    fn select(&self, selector: &str) -> Vec<WebElement> {
        collect_matches(self.doc.query_selector_all(selector), selector)
    }

    fn url(&self) -> String {
        self.doc.url().unwrap_or_default()
    }
}

impl ElementHandle for WebElement {
    fn select(&self, selector: &str) -> Vec<WebElement> {
        collect_matches(self.el.query_selector_all(selector), selector)
    }

    fn tag_name(&self) -> String {
        self.el.tag_name().to_ascii_lowercase()
    }

    fn add_class(&self, class: &str) {
        let _ = self.el.class_list().add_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.el.class_list().contains(class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.el.set_attribute(name, value);
    }

    fn text(&self) -> Option<String> {
        self.el.text_content()
    }

    fn set_text(&self, text: &str) {
        self.el.set_text_content(Some(text));
    }

    fn parent(&self) -> Option<WebElement> {
        self.el.parent_element().map(WebElement::from_element)
    }
}
