use shared_types::{Role, Session};

/// Dashboard to show right after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Login,
    Admin,
    Staff,
    /// Equipment browsing for students, and the fallback for any other role.
    Browse,
}

impl Landing {
    /// Roles the landing view is gated to.
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Landing::Login => &[],
            Landing::Admin => &[Role::Admin],
            Landing::Staff => &[Role::Staff],
            Landing::Browse => &[Role::Student],
        }
    }
}

pub fn resolve_landing(session: &Session) -> Landing {
    if !session.is_logged_in() {
        return Landing::Login;
    }
    match session.role {
        Some(Role::Admin) => Landing::Admin,
        Some(Role::Staff) => Landing::Staff,
        _ => Landing::Browse,
    }
}
