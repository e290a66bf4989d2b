//! Wires the greeting widget to the live page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use carrel_page::greeter::{self, Greeter};
use carrel_page::tree::DocumentTree;

use crate::dom::{WebDocument, WebElement};
use crate::prompt::WindowPrompt;
use crate::storage::LocalStore;

// The widget assumes the page's single heading/image/button trio, the way
// the templates render it.
const HEADING: &str = "h1";
const IMAGE: &str = "img";
const BUTTON: &str = "button";

/// Mount the greeting widget: greet or prompt on load, then attach the
/// rename and image-toggle click handlers.
///
/// # Errors
///
/// Returns an error when the heading, image, or button is missing from
/// the page; the widget stays unmounted in that case.
pub fn mount(doc: &WebDocument) -> Result<(), JsValue> {
    let heading = find_one(doc, HEADING)?;
    let image = find_one(doc, IMAGE)?;
    let button = find_one(doc, BUTTON)?;

    let widget = Greeter::new(LocalStore, WindowPrompt);
    widget.init(&heading);

    attach_click(&button, move || widget.rename(&heading))?;

    let toggle_target = image.clone();
    attach_click(&image, move || greeter::toggle_image(&toggle_target))?;

    Ok(())
}

fn find_one(doc: &WebDocument, selector: &str) -> Result<WebElement, JsValue> {
    doc.select(selector)
        .into_iter()
        .next()
        .ok_or_else(|| JsValue::from_str(&format!("no `{selector}` element on this page")))
}

// Handlers live for the page's lifetime, so the closure is leaked.
fn attach_click<F>(target: &WebElement, handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let element: HtmlElement = target.clone().into_element().dyn_into()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    element.set_onclick(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    Ok(())
}
