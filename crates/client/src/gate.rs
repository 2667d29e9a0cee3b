use shared_types::{Role, Session};

/// Outcome of checking a session against a route's allowed roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// No token. Send the user to the login view.
    Unauthenticated,
    /// Logged in, but the role is not in the allowed set.
    Forbidden { required: Vec<Role> },
    Authorized,
}

impl GateDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GateDecision::Authorized)
    }
}

/// Decide whether `session` may see a route restricted to `required`.
///
/// An empty `required` set admits any logged-in user. A session with a
/// token but no role is forbidden from every restricted route.
pub fn authorize(session: &Session, required: &[Role]) -> GateDecision {
    if !session.is_logged_in() {
        return GateDecision::Unauthenticated;
    }
    if required.is_empty() {
        return GateDecision::Authorized;
    }
    match session.role {
        Some(role) if required.contains(&role) => GateDecision::Authorized,
        _ => GateDecision::Forbidden {
            required: required.to_vec(),
        },
    }
}
