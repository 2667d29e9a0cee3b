use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lending portal role controlling which views and API actions are permitted.
///
/// - `Student`: browses equipment and submits loan requests.
/// - `Staff`: reviews, approves, rejects and closes loan requests.
/// - `Admin`: inventory, analytics and account management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Student,
    Staff,
    Admin,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Student, Role::Staff, Role::Admin];

impl Role {
    /// Strict, case-insensitive parse. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "staff" => Some(Role::Staff),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Parse a role string coming from storage or the network.
    /// Unknown values fall through to `Student`.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Title-case form used on the wire and for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }

    /// Staff and Admin may manage lending requests.
    pub fn can_manage_lending(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from_str_or_default(&raw))
    }
}

/// Join roles for messages, e.g. "Staff, Admin".
pub fn describe_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
