//! Injectable prompt seam.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Blocking single-line text prompt.
pub trait NamePrompt {
    /// Show the prompt and return the entered text, or `None` when the
    /// dialog was dismissed without input.
    fn prompt(&self, message: &str) -> Option<String>;
}

impl<T: NamePrompt + ?Sized> NamePrompt for &T {
    fn prompt(&self, message: &str) -> Option<String> {
        (**self).prompt(message)
    }
}

/// Scripted prompt used by native tests: hands out queued responses in
/// order. `None` entries model a dismissed dialog.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    responses: RefCell<VecDeque<Option<String>>>,
    calls: Cell<usize>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            responses: RefCell::new(
                responses
                    .into_iter()
                    .map(|r| r.map(Into::into))
                    .collect(),
            ),
            calls: Cell::new(0),
        }
    }

    /// Number of times the prompt was shown.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl NamePrompt for ScriptedPrompt {
    /// # Panics
    ///
    /// Panics when the script runs out of responses. The widget re-prompts
    /// forever on empty input, so an exhausted script would otherwise hang
    /// the test run.
    fn prompt(&self, _message: &str) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("prompt script exhausted")
    }
}
