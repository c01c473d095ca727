use apps_core::{ScriptStore, StoreError};
use web_sys as web;

/// `window.localStorage` as a script store.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[storage] localStorage unavailable");
        }
        Self { storage }
    }
}

impl ScriptStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
