//! Full configuration validation.
//!
//! Each section has its own check; all problems are collected into a
//! single `ConfigError` so the operator sees everything at once.

mod helpers;


use crate::schema::ConduitConfig;
use conduit_common::ConfigError;

use helpers::{validate_not_blank, validate_range, validate_range_u64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ConduitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);
    validate_server(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &ConduitConfig) {
    let model = &config.model;
    if !(model.url.starts_with("http://") || model.url.starts_with("https://")) {
        errors.push(format!(
            "model.url = {:?} must start with http:// or https://",
            model.url
        ));
    }
    validate_not_blank(errors, "model.api_key", &model.api_key);
    validate_not_blank(errors, "model.name", &model.name);
    validate_range(errors, "model.max_tokens", model.max_tokens, 1, 128_000);
    validate_range_u64(errors, "model.timeout_secs", model.timeout_secs, 1, 600);
    validate_range_u64(
        errors,
        "model.connect_timeout_secs",
        model.connect_timeout_secs,
        1,
        120,
    );
}

fn validate_server(errors: &mut Vec<String>, config: &ConduitConfig) {
    let server = &config.server;
    validate_not_blank(errors, "server.python_command", &server.python_command);
    validate_not_blank(errors, "server.node_command", &server.node_command);
    validate_range_u64(
        errors,
        "server.request_timeout_secs",
        server.request_timeout_secs,
        1,
        600,
    );
}
