use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One FastAPI-style validation entry inside a `detail` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationDetail {
    #[serde(default)]
    pub msg: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub loc: Vec<Value>,
}

/// Non-2xx response normalized to a status code and a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Build from an error response.
    ///
    /// A JSON body contributes its `detail` (a string, or validation entries
    /// joined by `"; "`). Anything else falls back to a generic message that
    /// carries the status code.
    pub fn from_response(status_code: u16, is_json: bool, body: &str) -> Self {
        if !is_json {
            return Self::new(status_code, format!("HTTP error! Status: {status_code}"));
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => {
                let message = Self::detail_message(&value)
                    .unwrap_or_else(|| format!("API Error ({status_code})"));
                Self::new(status_code, message)
            }
            Err(_) => Self::new(status_code, format!("HTTP error! Status: {status_code}")),
        }
    }

    /// Extract a message from a JSON error body's `detail` field.
    pub fn detail_message(body: &Value) -> Option<String> {
        match body.get("detail")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<String> = items
                    .iter()
                    .filter_map(|item| {
                        serde_json::from_value::<ValidationDetail>(item.clone())
                            .ok()
                            .map(|d| d.msg)
                    })
                    .filter(|m| !m.is_empty())
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status_code)
    }
}

impl std::error::Error for ApiError {}

/// Every way an API call can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No response was received.
    Transport { message: String },
    /// The server answered with a non-2xx status.
    Api(ApiError),
    /// A 2xx response failed a shape or required-field check.
    InvalidResponse { message: String },
    /// The issuing view was torn down before the response arrived.
    Cancelled,
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        ClientError::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    /// Text suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport { message } => {
                if message.is_empty() {
                    "Could not reach the server.".to_string()
                } else {
                    format!("Could not reach the server: {message}")
                }
            }
            ClientError::Api(e) => e.message.clone(),
            ClientError::InvalidResponse { message } => message.clone(),
            ClientError::Cancelled => "Request cancelled.".to_string(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { message } => write!(f, "Transport: {message}"),
            ClientError::Api(e) => write!(f, "Api: {e}"),
            ClientError::InvalidResponse { message } => write!(f, "InvalidResponse: {message}"),
            ClientError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for ClientError {
    fn from(e: ApiError) -> Self {
        ClientError::Api(e)
    }
}
