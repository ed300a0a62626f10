use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

pub fn default_server_binding_addr() -> String {
    "0.0.0.0:3003".to_string()
}

pub fn default_generation_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

pub fn default_generation_model() -> String {
    "gemini-1.5-flash".to_string()
}

/// The model provider's credential, read from the environment when the
/// config doesn't set one.
pub fn default_api_key() -> String {
    dotenvy::var("API_KEY").unwrap_or_default()
}

/// Deserialize a string, substituting `${VAR}` references with values from
/// the environment.
pub fn deserialize_with_envsubst<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let s = String::deserialize(deserializer)?;
    // envsubst rejects variables containing its own delimiters, so those are
    // skipped rather than failing the whole config.
    let variables: HashMap<String, String> = std::env::vars()
        .filter(|(key, value)| !key.contains(['$', '{', '}']) && !value.contains(['$', '{', '}']))
        .collect();
    let s = envsubst::substitute(s, &variables).map_err(serde::de::Error::custom)?;

    // Anything left templated references a variable that isn't set.
    if envsubst::is_templated(&s) {
        return Err(serde::de::Error::custom(format!(
            "unresolved environment variable in \"{s}\""
        )));
    }
    Ok(T::from(s))
}

/// Extract JSON from a model response, dropping a surrounding markdown code
/// fence if the model added one.
pub fn extract_json(s: &str) -> &str {
    let s = s.trim();
    match s.strip_prefix("```") {
        Some(fenced) => {
            let fenced = fenced.strip_suffix("```").unwrap_or(fenced);
            let fenced = fenced.strip_prefix("json").unwrap_or(fenced);
            fenced.trim()
        }
        None => s,
    }
}
