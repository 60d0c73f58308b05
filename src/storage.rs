#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to read stored value: {0}")]
    Read(String),

    #[error("failed to write stored value: {0}")]
    Write(String),
}

/// Best-effort string storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, values stored verbatim.
///
/// The storage object is looked up on every call: a browser may refuse
/// access at any time (privacy mode, disabled cookies) and that must surface
/// as an error rather than a panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn raw() -> Result<web_sys::Storage, StorageError> {
        gloo_utils::window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::raw()?
            .get_item(key)
            .map_err(|e| StorageError::Read(describe(&e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::raw()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(describe(&e)))
    }
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

use wasm_bindgen::JsValue;
