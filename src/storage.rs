use crate::models::user::User;
use leptos::logging::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("could not encode session: {0}")]
    Encode(String),
}

/// Key/value persistence for the signed-in session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// In-process store used during server rendering and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Local storage in the browser, memory anywhere else.
pub fn default_store() -> Rc<dyn SessionStore> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(BrowserStorage)
    } else {
        Rc::new(MemoryStorage::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Both keys must be present and the user must decode, otherwise there is no session.
pub fn load_session(store: &dyn SessionStore) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let raw_user = store.get(USER_KEY)?;
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Some(Session { token, user }),
        Err(err) => {
            warn!("[STORAGE] Ignoring stored user that does not decode: {}", err);
            None
        }
    }
}

pub fn save_session(store: &dyn SessionStore, session: &Session) -> Result<(), StorageError> {
    let user = serde_json::to_string(&session.user).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set(TOKEN_KEY, &session.token)?;
    store.set(USER_KEY, &user)
}

pub fn clear_session(store: &dyn SessionStore) -> Result<(), StorageError> {
    store.remove(TOKEN_KEY)?;
    store.remove(USER_KEY)
}
