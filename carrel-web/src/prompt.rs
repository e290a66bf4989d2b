//! `window.prompt` implementation of the prompt seam.

use carrel_page::prompt::NamePrompt;

use crate::dom::window;

/// Blocking modal prompt backed by `window.prompt`. Dismissing the dialog
/// (or a browser refusing to show one) reads as no input.
#[derive(Clone, Copy, Default)]
pub struct WindowPrompt;

impl NamePrompt for WindowPrompt {
    fn prompt(&self, message: &str) -> Option<String> {
        window().prompt_with_message(message).ok().flatten()
    }
}
