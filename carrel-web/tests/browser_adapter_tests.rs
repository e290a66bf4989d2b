#![cfg(target_arch = "wasm32")]
//! Browser tests for the `web-sys` adapters and the load-time wiring.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use carrel_page::greeter;
use carrel_page::store::KeyValueStore;
use carrel_page::styler::{self, StyleManifest};
use carrel_page::tree::ElementHandle;
use carrel_web::dom::{self, WebDocument, WebElement};
use carrel_web::greet;
use carrel_web::storage::{self, LocalStore};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn element_adapter_round_trips_classes_attributes_and_text() {
    let document = dom::document();
    let el = document.create_element("p").unwrap();
    let handle = WebElement::from_element(el.clone());

    handle.add_class("list-group");
    handle.add_class("list-group");
    assert!(handle.has_class("list-group"));
    // set semantics: the duplicate add did not grow the class list
    assert_eq!(el.class_list().length(), 1);

    handle.set_attr("data-kind", "note");
    assert_eq!(handle.attr("data-kind").as_deref(), Some("note"));

    handle.set_text("hello");
    assert_eq!(handle.text().as_deref(), Some("hello"));
    assert_eq!(handle.tag_name(), "p");

    let wrapper = document.create_element("div").unwrap();
    wrapper.append_child(&el).unwrap();
    assert_eq!(handle.parent().map(|p| p.tag_name()).as_deref(), Some("div"));
}

#[wasm_bindgen_test]
fn styling_pass_decorates_live_markup() {
    let document = dom::document();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(
        "<ul class=\"sidebar-nav\"><li><a href=\"/catalog/\">Home</a></li></ul>\
         <form><input type=\"text\"></form>",
    );
    document.body().unwrap().append_child(&container).unwrap();

    let doc = WebDocument::new();
    styler::apply_manifest(&doc, StyleManifest::builtin());

    let nav = container.query_selector(".sidebar-nav").unwrap().unwrap();
    assert!(nav.class_list().contains("list-group"));
    let item = container.query_selector(".sidebar-nav li").unwrap().unwrap();
    assert!(item.class_list().contains("list-group-item"));
    assert!(item.class_list().contains("list-group-item-action"));
    let input = container.query_selector("form input").unwrap().unwrap();
    assert!(input.class_list().contains("form-control"));

    container.remove();
}

#[wasm_bindgen_test]
fn image_toggle_flips_a_live_img() {
    let document = dom::document();
    let img = document.create_element("img").unwrap();
    img.set_attribute("src", greeter::IMAGE_PRIMARY).unwrap();
    let handle = WebElement::from_element(img.clone());

    greeter::toggle_image(&handle);
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some(greeter::IMAGE_ALTERNATE)
    );
    greeter::toggle_image(&handle);
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some(greeter::IMAGE_PRIMARY)
    );
}

#[wasm_bindgen_test]
fn local_store_round_trips_through_local_storage() {
    let store = LocalStore;
    store.set("carrel.test", "value");
    assert_eq!(store.get("carrel.test").as_deref(), Some("value"));

    storage::local_storage()
        .unwrap()
        .remove_item("carrel.test")
        .unwrap();
    assert_eq!(store.get("carrel.test"), None);
}

// Mounting with a stored name must not prompt, so this is safe headless.
#[wasm_bindgen_test]
fn mount_greets_stored_name_and_wires_the_image_toggle() {
    let document = dom::document();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(
        "<h1>Carrel</h1><img src=\"images/mascot.png\"><button>Change user</button>",
    );
    document.body().unwrap().append_child(&container).unwrap();

    storage::local_storage()
        .unwrap()
        .set_item(greeter::NAME_KEY, "Tester")
        .unwrap();

    greet::mount(&WebDocument::new()).expect("heading, image and button are present");

    let heading = container.query_selector("h1").unwrap().unwrap();
    assert_eq!(heading.text_content().as_deref(), Some("Welcome! Tester"));

    let img: HtmlElement = container
        .query_selector("img")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    img.click();
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some(greeter::IMAGE_ALTERNATE)
    );

    storage::local_storage()
        .unwrap()
        .remove_item(greeter::NAME_KEY)
        .unwrap();
    container.remove();
}
