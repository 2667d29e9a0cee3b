pub mod analytics;
pub mod auth;
pub mod common;
pub mod config;
pub mod equipment;
pub mod error;
pub mod lending;
pub mod role;
pub mod session;

pub use analytics::*;
pub use auth::*;
pub use common::MessageResponse;
pub use config::*;
pub use equipment::*;
pub use error::*;
pub use lending::*;
pub use role::*;
pub use session::*;
