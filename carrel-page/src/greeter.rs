//! Greeting widget: stored-name onboarding and the mascot image toggle.

use crate::prompt::NamePrompt;
use crate::store::KeyValueStore;
use crate::tree::ElementHandle;

/// Storage key for the visitor's name.
pub const NAME_KEY: &str = "name";
/// Message shown by the name prompt.
pub const NAME_PROMPT: &str = "Please enter your name:";
/// Heading prefix in front of the stored name.
pub const GREETING_PREFIX: &str = "Welcome! ";
/// Default mascot image source.
pub const IMAGE_PRIMARY: &str = "images/mascot.png";
/// Alternate mascot image source shown after a click.
pub const IMAGE_ALTERNATE: &str = "images/mascot2.png";

/// Widget state, derived from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingState {
    /// No name stored yet; the visitor gets prompted on load.
    Unnamed,
    /// A name is stored and greeted in the heading.
    Named(String),
}

/// The greeting widget over injectable storage and prompt seams.
pub struct Greeter<S, P> {
    store: S,
    prompt: P,
}

impl<S: KeyValueStore, P: NamePrompt> Greeter<S, P> {
    pub fn new(store: S, prompt: P) -> Self {
        Self { store, prompt }
    }

    /// Current state as recorded in storage.
    ///
    /// An empty stored value counts as unnamed; the prompt loop never
    /// writes one.
    #[must_use]
    pub fn state(&self) -> GreetingState {
        match self.store.get(NAME_KEY) {
            Some(name) if !name.is_empty() => GreetingState::Named(name),
            _ => GreetingState::Unnamed,
        }
    }

    /// Load-time entry: greet a stored name, or run the prompt loop for a
    /// first-time visitor.
    pub fn init<E: ElementHandle>(&self, heading: &E) {
        match self.state() {
            GreetingState::Named(name) => greet(heading, &name),
            GreetingState::Unnamed => self.rename(heading),
        }
    }

    /// Prompt for a name, store it, and greet it in the heading. Always
    /// overwrites whatever name was stored before.
    ///
    /// The prompt repeats until a non-empty name is entered; dismissing
    /// the dialog re-opens it.
    pub fn rename<E: ElementHandle>(&self, heading: &E) {
        let name = self.request_name();
        self.store.set(NAME_KEY, &name);
        greet(heading, &name);
    }

    fn request_name(&self) -> String {
        loop {
            match self.prompt.prompt(NAME_PROMPT) {
                Some(name) if !name.is_empty() => return name,
                _ => {}
            }
        }
    }
}

fn greet<E: ElementHandle>(heading: &E, name: &str) {
    heading.set_text(&format!("{GREETING_PREFIX}{name}"));
}

/// Swap the image between its two fixed sources: the primary source
/// becomes the alternate, anything else becomes the primary.
pub fn toggle_image<E: ElementHandle>(image: &E) {
    if image.attr("src").as_deref() == Some(IMAGE_PRIMARY) {
        image.set_attr("src", IMAGE_ALTERNATE);
    } else {
        image.set_attr("src", IMAGE_PRIMARY);
    }
}
