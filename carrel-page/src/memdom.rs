//! In-memory document tree, the test double for the document seam.
//!
//! Nodes live in a shared arena; handles are `(arena, index)` pairs so
//! cloning a handle aliases the same element, as in a real DOM. Selection
//! runs through [`crate::selector`], giving the same matching behavior the
//! browser's `querySelectorAll` has for the supported subset.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::selector::Selector;
use crate::tree::{DocumentTree, ElementHandle};

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<usize>,
}

type Arena = Rc<RefCell<Vec<NodeData>>>;

/// An in-memory document with a fixed URL.
#[derive(Debug, Default)]
pub struct MemDocument {
    arena: Arena,
    url: String,
}

/// Handle to one element of a [`MemDocument`].
///
/// Unlike a real element, `text` covers only the element's own content,
/// which is all the enhancement logic reads or writes.
#[derive(Debug, Clone)]
pub struct MemElement {
    arena: Arena,
    index: usize,
}

impl MemDocument {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            arena: Arena::default(),
            url: url.to_string(),
        }
    }

    /// Append a top-level element.
    pub fn append(&self, tag: &str) -> MemElement {
        push_node(&self.arena, tag, None)
    }
}

impl MemElement {
    /// Append a child element.
    pub fn append(&self, tag: &str) -> MemElement {
        push_node(&self.arena, tag, Some(self.index))
    }
}

// Nodes are only ever appended, so arena order is document order.
fn push_node(arena: &Arena, tag: &str, parent: Option<usize>) -> MemElement {
    let index = {
        let mut nodes = arena.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            parent,
            ..NodeData::default()
        });
        nodes.len() - 1
    };
    MemElement {
        arena: Rc::clone(arena),
        index,
    }
}

fn select_from(arena: &Arena, selector: &str, scope: Option<usize>) -> Vec<MemElement> {
    let parsed = match Selector::parse(selector) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("unsupported selector `{selector}`: {err}");
            return Vec::new();
        }
    };
    let len = arena.borrow().len();
    (0..len)
        .map(|index| MemElement {
            arena: Rc::clone(arena),
            index,
        })
        .filter(|el| scope.is_none_or(|root| is_descendant(arena, el.index, root)))
        .filter(|el| parsed.matches(el))
        .collect()
}

fn is_descendant(arena: &Arena, index: usize, root: usize) -> bool {
    let nodes = arena.borrow();
    let mut cursor = nodes[index].parent;
    while let Some(i) = cursor {
        if i == root {
            return true;
        }
        cursor = nodes[i].parent;
    }
    false
}

impl DocumentTree for MemDocument {
    type El = MemElement;

    fn select(&self, selector: &str) -> Vec<MemElement> {
        select_from(&self.arena, selector, None)
    }

    fn url(&self) -> String {
        self.url.clone()
    }
}

impl ElementHandle for MemElement {
    fn select(&self, selector: &str) -> Vec<MemElement> {
        select_from(&self.arena, selector, Some(self.index))
    }

    fn tag_name(&self) -> String {
        self.arena.borrow()[self.index].tag.clone()
    }

    fn add_class(&self, class: &str) {
        self.arena.borrow_mut()[self.index]
            .classes
            .insert(class.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        self.arena.borrow()[self.index].classes.contains(class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.arena.borrow()[self.index].attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.arena.borrow_mut()[self.index]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn text(&self) -> Option<String> {
        self.arena.borrow()[self.index].text.clone()
    }

    fn set_text(&self, text: &str) {
        self.arena.borrow_mut()[self.index].text = Some(text.to_string());
    }

    fn parent(&self) -> Option<MemElement> {
        let parent = self.arena.borrow()[self.index].parent?;
        Some(MemElement {
            arena: Rc::clone(&self.arena),
            index: parent,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn handles_alias_the_same_node() {
        let doc = MemDocument::new("http://localhost/");
        let list = doc.append("ul");
        let alias = list.clone();
        alias.add_class("list-group");
        assert!(list.has_class("list-group"));
    }

    #[test]
    fn document_select_runs_in_document_order() {
        let doc = MemDocument::new("http://localhost/");
        let first = doc.append("ul");
        first.add_class("a");
        let second = doc.append("ul");
        second.add_class("b");

        let found = doc.select("ul");
        assert_eq!(found.len(), 2);
        assert!(found[0].has_class("a"));
        assert!(found[1].has_class("b"));
    }

    #[test]
    fn scoped_select_only_returns_descendants() {
        let doc = MemDocument::new("http://localhost/");
        let left = doc.append("div");
        let inside = left.append("li");
        inside.set_attr("id", "inside");
        let right = doc.append("div");
        right.append("li").set_attr("id", "outside");

        let found = left.select("li");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].attr("id").as_deref(), Some("inside"));
    }

    #[test]
    fn unsupported_selector_yields_empty_match_set() {
        let doc = MemDocument::new("http://localhost/");
        doc.append("ul");
        assert!(doc.select("ul > li").is_empty());
    }

    #[test]
    fn text_and_parent_round_trip() {
        let doc = MemDocument::new("http://localhost/");
        let item = doc.append("li");
        let link = item.append("a");
        link.set_text("Books");
        assert_eq!(link.text().as_deref(), Some("Books"));
        let parent = link.parent().expect("link should have a parent");
        assert_eq!(parent.tag_name(), "li");
        assert!(doc.append("ul").parent().is_none());
    }
}
