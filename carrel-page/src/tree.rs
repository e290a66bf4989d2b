//! Injectable document-tree seam.
//!
//! The enhancement logic never touches a concrete DOM. It sees the page
//! through these traits, so the browser document and the in-memory test
//! tree are interchangeable.

/// Handle to one element of a document tree.
///
/// Handles are cheap to clone and share underlying element identity, the
/// way a JavaScript element reference does. Mutations take `&self` since
/// every implementation uses interior (or host-side) mutability.
pub trait ElementHandle: Clone {
    /// Elements matching `selector` among this element's descendants, in
    /// document order. An unsupported selector yields an empty set.
    fn select(&self, selector: &str) -> Vec<Self>;

    /// Lowercase tag name.
    fn tag_name(&self) -> String;

    /// Add `class` to the element's class set. Adding a class the element
    /// already carries is a no-op, so repeated styling runs are idempotent.
    fn add_class(&self, class: &str);

    /// Whether the element's class set contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Attribute value, if the attribute is present.
    fn attr(&self, name: &str) -> Option<String>;

    /// Set an attribute, replacing any previous value.
    fn set_attr(&self, name: &str, value: &str);

    /// Text content of the element and its descendants.
    fn text(&self) -> Option<String>;

    /// Replace the element's content with `text`.
    fn set_text(&self, text: &str);

    /// Parent element, or `None` at the top of the tree.
    fn parent(&self) -> Option<Self>;
}

/// A whole document: root-level selection plus the page URL.
pub trait DocumentTree {
    type El: ElementHandle;

    /// Elements matching `selector` anywhere in the document, in document
    /// order. An unsupported selector yields an empty set.
    fn select(&self, selector: &str) -> Vec<Self::El>;

    /// Full URL of the document, query string included.
    fn url(&self) -> String;
}
