use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Workspace `config.toml`, embedded so the browser build needs no file access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Compile-time override for the API origin.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("LENDING_API_BASE_URL");

/// Parse a config document. A malformed document falls back to defaults.
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> ClientConfig {
    let config: ClientConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        ClientConfig::default()
    });
    config.with_base_url_override(base_url_override)
}

/// The loaded configuration. Parsed on first access.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| parse_config(EMBEDDED_CONFIG, BASE_URL_OVERRIDE))
}
