//! `localStorage`-backed implementation of the storage seam.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use carrel_page::store::KeyValueStore;

use crate::dom::window;

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or
/// `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Best-effort store over `localStorage`. Reads come back empty and
/// writes are dropped when storage is unavailable (private browsing,
/// quota), matching the storage seam's contract.
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = local_storage().ok()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
