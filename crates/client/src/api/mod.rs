//! Typed wrappers over the lending API endpoints.

mod analytics;
mod equipment;
mod lending;
mod users;

pub use lending::{LENDING_FALLBACK_PATH, PENDING_REQUESTS_PATH};
