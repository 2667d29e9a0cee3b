use crate::{ClientError, Role};
use serde::{Deserialize, Serialize};

/// Login request body for `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration payload for `POST /users/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: Role,
}

/// Raw login response as sent by the server. Every field is optional so a
/// partial payload can be detected instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Validated login result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResult {
    pub access_token: String,
    pub role: Role,
    pub user_id: i64,
    pub full_name: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl LoginResponse {
    /// Require all four session fields. Empty strings count as missing.
    pub fn into_auth_result(self) -> Result<AuthResult, ClientError> {
        match (
            non_empty(self.access_token),
            non_empty(self.role),
            self.user_id,
            non_empty(self.full_name),
        ) {
            (Some(access_token), Some(role), Some(user_id), Some(full_name)) => Ok(AuthResult {
                access_token,
                role: Role::from_str_or_default(&role),
                user_id,
                full_name,
            }),
            _ => Err(ClientError::invalid_response(
                "Invalid response from login API.",
            )),
        }
    }
}
