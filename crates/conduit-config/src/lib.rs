//! conduit configuration.
//!
//! Settings live in a TOML file (`config.toml` under the OS config
//! directory unless a path is given). Every section uses serde defaults,
//! so a partial file works; a handful of environment variables override
//! the file so credentials do not have to be written to disk.
//!
//! ```rust,no_run
//! use conduit_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.model.name);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ConduitConfig;

use std::path::Path;

use conduit_common::ConfigError;

/// Load, override from the environment, and validate.
///
/// With `path = None` the platform default location is used and a
/// commented default file is created there if none exists.
pub fn load_config(path: Option<&Path>) -> Result<ConduitConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    env::apply_overrides(&mut config, |key| std::env::var(key).ok());

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_rejects_missing_explicit_file() {
        let err = load_config(Some(Path::new("/tmp/conduit_definitely_missing.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[model]
api_key = "sk-test"
name = "gpt-4o-mini"
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.model.name, "gpt-4o-mini");
        assert_eq!(config.model.max_tokens, 4000);
    }
}
