use super::defaults::PLACEHOLDER_API_KEY;
use crate::error::{CliGptError, Result};
use std::path::Path;

/// Reject a missing key or the placeholder written into new config files.
pub fn validate_api_key(api_key: Option<String>, origin: &Path) -> Result<String> {
    match api_key {
        Some(key) if !key.trim().is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
        _ => Err(CliGptError::ConfigError(format!(
            "Please set the API key at: {} (or export OPENAI_API_KEY)",
            origin.display()
        ))),
    }
}

/// Accept a full completions URL, a `/v1` base, or a bare host.
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with("/chat/completions") {
        endpoint.to_string()
    } else if endpoint.ends_with("/v1") {
        format!("{}/chat/completions", endpoint)
    } else if endpoint.ends_with("/v1/") {
        format!("{}chat/completions", endpoint)
    } else {
        format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'))
    }
}
