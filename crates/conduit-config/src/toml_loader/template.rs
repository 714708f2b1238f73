//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# conduit configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# CONDUIT_API_KEY, CONDUIT_API_URL and CONDUIT_MODEL override this file.

[model]
# url = "https://api.openai.com/v1/chat/completions"
# api_key = ""
# name = "gpt-4o"
# max_tokens = 4000          # 1-128000
# timeout_secs = 120         # 1-600
# connect_timeout_secs = 10  # 1-120

[server]
# python_command = "python"  # launcher for .py tool servers
# node_command = "node"      # launcher for .js tool servers
# request_timeout_secs = 30  # 1-600

[prompt]
# persona = "a helpful assistant"
# result_instruction = "The tool returned the result below. Organize it and give the user the final answer.\n"

[conversation]
# persist_answers = false    # keep final answers in the history

[logging]
# level = "warn"             # debug, info, warn, error
"##
    .to_string()
}
