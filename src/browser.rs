//! Browser Bindings
//!
//! Local storage, `location.hash`, file reading and new-tab navigation.
//! Every call degrades to a no-op outside a window.

use js_sys::Uint8Array;
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Storage};

use admin_core::session::TokenStore;
use admin_core::ImageUpload;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Bearer token in `window.localStorage`
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        let Some(storage) = local_storage() else {
            warn!("localStorage unavailable, token not saved");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            warn!("Failed to save token: {}", describe(&e));
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                warn!("Failed to clear token: {}", describe(&e));
            }
        }
    }
}

// ========================
// Location
// ========================

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(hash) {
            warn!("Failed to set location hash: {}", describe(&e));
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("Failed to open {}: {}", url, describe(&e));
        }
    }
}

// ========================
// Files
// ========================

/// Read a picked file into an upload payload
pub async fn read_upload(file: &File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| describe(&e))?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

/// Blob URL for a local preview; release it with `revoke_object_url`
pub fn object_url(file: &File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
