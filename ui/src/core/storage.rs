//! Session-scoped persistence for the share filter selection.
//!
//! One key, overwritten wholesale on every save. On wasm this is backed by
//! `window.sessionStorage`; on native targets a per-thread in-memory map
//! with the same semantics backs the test suite.

use thiserror::Error;

use super::filter::FilterState;

pub const FILTER_STATE_KEY: &str = "shareFilterState";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected the write: {0}")]
    Backend(String),
    #[error("stored filter state is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize the full selection and overwrite the stored blob.
pub fn save_filter_state(state: &FilterState) -> Result<(), StorageError> {
    let blob = serde_json::to_string(state)?;
    write_raw(FILTER_STATE_KEY, &blob)
}

/// `Ok(None)` when nothing was saved this session. A malformed blob is an
/// error so the caller can log it and treat it as nothing to restore.
pub fn load_filter_state() -> Result<Option<FilterState>, StorageError> {
    match read_raw(FILTER_STATE_KEY)? {
        Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
        None => Ok(None),
    }
}

#[cfg(target_arch = "wasm32")]
fn session_store() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.session_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn write_raw(key: &str, value: &str) -> Result<(), StorageError> {
    session_store()?
        .set_item(key, value)
        .map_err(|err| StorageError::Backend(format!("{err:?}")))
}

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> Result<Option<String>, StorageError> {
    session_store()?
        .get_item(key)
        .map_err(|err| StorageError::Backend(format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn set(key: &str, value: &str) {
        STORE.with(|store| {
            store
                .borrow_mut()
                .insert(key.to_string(), value.to_string())
        });
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(key: &str, value: &str) -> Result<(), StorageError> {
    memory::set(key, value);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw(key: &str) -> Result<Option<String>, StorageError> {
    Ok(memory::get(key))
}

/// Seed the raw blob directly; lets tests exercise the malformed path.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn seed_raw_for_tests(value: &str) {
    memory::set(FILTER_STATE_KEY, value);
}
