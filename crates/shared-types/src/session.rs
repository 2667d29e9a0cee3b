use crate::Role;
use serde::{Deserialize, Serialize};

/// Client-held record of the current authenticated user.
///
/// Logged out: every field is `None`. Logged in: `token` is set and, after a
/// login, so are the other three.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub user_id: Option<i64>,
    pub full_name: Option<String>,
}

impl Session {
    /// A fully populated session.
    pub fn authenticated(
        token: impl Into<String>,
        role: Role,
        user_id: i64,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
            user_id: Some(user_id),
            full_name: Some(full_name.into()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Bearer token for API calls, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Guest")
    }
}
