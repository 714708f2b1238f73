//! Environment-variable overrides applied on top of the TOML file.

use tracing::debug;

use crate::schema::ConduitConfig;

pub const API_KEY_VAR: &str = "CONDUIT_API_KEY";
pub const API_URL_VAR: &str = "CONDUIT_API_URL";
pub const MODEL_VAR: &str = "CONDUIT_MODEL";

/// Overwrite config fields from the environment.
///
/// `lookup` is usually `|k| std::env::var(k).ok()`; tests pass a closure over
/// a fixed map. Empty values are ignored.
pub fn apply_overrides<F>(config: &mut ConduitConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = get(API_KEY_VAR) {
        debug!("model.api_key overridden by {API_KEY_VAR}");
        config.model.api_key = key;
    }
    if let Some(url) = get(API_URL_VAR) {
        debug!("model.url overridden by {API_URL_VAR}");
        config.model.url = url;
    }
    if let Some(name) = get(MODEL_VAR) {
        debug!("model.name overridden by {MODEL_VAR}");
        config.model.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = ConduitConfig::default();
        config.model.api_key = "from-file".into();

        apply_overrides(
            &mut config,
            lookup_from(&[
                (API_KEY_VAR, "from-env"),
                (API_URL_VAR, "http://localhost:8000/v1/chat/completions"),
                (MODEL_VAR, "qwen2.5"),
            ]),
        );

        assert_eq!(config.model.api_key, "from-env");
        assert_eq!(config.model.url, "http://localhost:8000/v1/chat/completions");
        assert_eq!(config.model.name, "qwen2.5");
    }

    #[test]
    fn missing_or_blank_vars_leave_config_untouched() {
        let mut config = ConduitConfig::default();
        config.model.api_key = "from-file".into();

        apply_overrides(&mut config, lookup_from(&[(API_KEY_VAR, "   ")]));

        assert_eq!(config.model.api_key, "from-file");
        assert_eq!(config.model.name, "gpt-4o");
    }
}
