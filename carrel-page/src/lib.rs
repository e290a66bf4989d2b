//! Carrel page enhancements
//!
//! Platform-agnostic logic for the client-side enhancements on the Carrel
//! library catalog site. Two independent units run once per page load: the
//! navigation styler, which decorates server-rendered lists and forms with
//! Bootstrap utility classes, and the greeting widget, which keeps the
//! visitor's name in key-value storage and toggles the mascot image.
//!
//! All logic works against the injectable seams in [`tree`], [`store`] and
//! [`prompt`]; browser bindings live in the `carrel-web` crate, and the
//! in-memory doubles in [`memdom`] back the native tests.

pub mod greeter;
pub mod memdom;
pub mod paths;
pub mod prompt;
pub mod selector;
pub mod store;
pub mod styler;
pub mod tree;

// Re-export commonly used types
pub use greeter::{Greeter, GreetingState, toggle_image};
pub use memdom::{MemDocument, MemElement};
pub use prompt::{NamePrompt, ScriptedPrompt};
pub use selector::Selector;
pub use store::{KeyValueStore, MemoryStore};
pub use styler::{ClassPass, ManifestError, StyleManifest};
pub use tree::{DocumentTree, ElementHandle};
