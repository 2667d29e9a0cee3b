use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Acknowledgement body returned by action endpoints such as
/// `POST /lending/approve/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Accept a number or a numeric string. SQL `SUM`/`AVG` columns arrive as
/// decimal strings from the lending API.
pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    lenient_opt_f64(deserializer).map(|v| v.unwrap_or_default())
}

/// Optional variant of [`lenient_f64`]; `null` and unparseable strings map to `None`.
pub fn lenient_opt_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
