//! Session store with write-through persistence.

use shared_types::{Role, Session};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "userRole";
pub const USER_ID_KEY: &str = "userId";
pub const FULL_NAME_KEY: &str = "fullName";

const ALL_KEYS: [&str; 4] = [TOKEN_KEY, ROLE_KEY, USER_ID_KEY, FULL_NAME_KEY];

/// Durable string key/value storage.
///
/// Backends swallow their own I/O failures after logging them; a session that
/// cannot be persisted still works for the lifetime of the page.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    /// Write several keys as one update.
    fn set_many(&mut self, entries: &[(&str, &str)]) {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Remove several keys as one update.
    fn remove_many(&mut self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) {
        (**self).set_many(entries)
    }

    fn remove_many(&mut self, keys: &[&str]) {
        (**self).remove_many(keys)
    }
}

/// In-process storage for tests and server-side rendering.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON object on disk. Used by native desktop builds.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Open `path`, starting empty if the file is missing or corrupt.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "session file is corrupt, starting empty");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self) {
        let result = serde_json::to_string_pretty(&self.entries)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "failed to persist session");
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value.to_string());
        }
        self.flush();
    }

    fn remove_many(&mut self, keys: &[&str]) {
        let before = self.entries.len();
        for key in keys {
            self.entries.remove(*key);
        }
        if self.entries.len() != before {
            self.flush();
        }
    }
}

/// Window `localStorage`. When storage is unavailable (private mode, denied
/// access) every read misses and writes are dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!(key, "localStorage rejected write");
                }
            }
            None => warn!(key, "localStorage unavailable"),
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Current session plus the storage it is mirrored to.
///
/// The two mutators are the only writers, and each one rewrites all four
/// keys before returning.
pub struct SessionStore<S: SessionStorage> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restore the session from `storage`.
    ///
    /// Missing or corrupt values become absent; nothing is rejected. Without
    /// a token the session is empty regardless of the other keys. With a
    /// token, a missing or unknown role normalizes to `Student`.
    pub fn load(storage: S) -> Self {
        let read = |key: &str| storage.get(key).filter(|v| !v.is_empty());

        let session = match read(TOKEN_KEY) {
            Some(token) => Session {
                token: Some(token),
                role: Some(
                    read(ROLE_KEY)
                        .map(|r| Role::from_str_or_default(&r))
                        .unwrap_or_default(),
                ),
                user_id: read(USER_ID_KEY).and_then(|v| v.trim().parse().ok()),
                full_name: read(FULL_NAME_KEY),
            },
            None => Session::default(),
        };

        Self { session, storage }
    }

    /// Replace the whole session and persist it.
    pub fn set_auth(&mut self, token: &str, role: Role, user_id: i64, full_name: &str) {
        self.session = Session::authenticated(token, role, user_id, full_name);
        let user_id_text = user_id.to_string();
        self.storage.set_many(&[
            (TOKEN_KEY, token),
            (ROLE_KEY, role.as_str()),
            (USER_ID_KEY, user_id_text.as_str()),
            (FULL_NAME_KEY, full_name),
        ]);
        info!(user_id, %role, "session established");
    }

    /// Clear the session and remove every stored key.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.storage.remove_many(&ALL_KEYS);
        info!("session cleared");
    }

    pub fn read(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
