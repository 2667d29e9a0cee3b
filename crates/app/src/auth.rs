use client::{SessionStorage, SessionStore};
use dioxus::prelude::*;
use shared_types::{AuthResult, Role, Session};

/// Session state shared through context.
///
/// Built once in `App`; every read subscribes the calling component, and the
/// two mutators persist before notifying dependents.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    store: Signal<SessionStore<Box<dyn SessionStorage>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::with_storage(platform_storage())
    }

    pub fn with_storage(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            store: Signal::new(SessionStore::load(storage)),
        }
    }

    pub fn session(&self) -> Session {
        self.store.read().read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.read().is_logged_in()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.read().read().role
    }

    /// Bearer token for an API call. Does not subscribe the caller.
    pub fn token(&self) -> Option<String> {
        self.store.peek().read().token.clone()
    }

    pub fn set_auth(&mut self, auth: &AuthResult) {
        self.store
            .write()
            .set_auth(&auth.access_token, auth.role, auth.user_id, &auth.full_name);
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_storage() -> Box<dyn SessionStorage> {
    Box::new(client::BrowserStorage::new())
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn platform_storage() -> Box<dyn SessionStorage> {
    Box::new(client::FileStorage::open("session.json"))
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
fn platform_storage() -> Box<dyn SessionStorage> {
    Box::new(client::MemoryStorage::new())
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
