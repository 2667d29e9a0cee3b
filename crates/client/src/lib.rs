//! Non-UI core of the lending portal: API access, session persistence and
//! role-based routing decisions.

pub mod api;
pub mod cancel;
pub mod config;
pub mod gate;
pub mod http;
pub mod landing;
pub mod session;

pub use cancel::RequestScope;
pub use config::client_config;
pub use gate::{authorize, GateDecision};
pub use http::{ApiClient, HttpMethod};
pub use landing::{resolve_landing, Landing};
pub use session::{FileStorage, MemoryStorage, SessionStorage, SessionStore};

#[cfg(target_arch = "wasm32")]
pub use session::BrowserStorage;
