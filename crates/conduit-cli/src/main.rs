//! conduit: an interactive agent that lets a chat model call the tools of
//! a local MCP server.

mod cli;
mod repl;

use std::process::ExitCode;
use std::time::Duration;

use conduit_ai::{ChatClient, ChatConfig, Session, SessionOptions, ToolInvocation};
use conduit_common::{ConduitError, ToolError, Turn};
use conduit_config::ConduitConfig;
use conduit_mcp::{ConnectOptions, Launchers, McpSession};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log directive {directive:?}: {e}");
        LevelFilter::WARN.into()
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn chat_config(config: &ConduitConfig) -> ChatConfig {
    ChatConfig::new(&config.model.url, &config.model.api_key)
        .with_timeout(Duration::from_secs(config.model.timeout_secs))
        .with_connect_timeout(Duration::from_secs(config.model.connect_timeout_secs))
}

fn connect_options(config: &ConduitConfig) -> ConnectOptions {
    ConnectOptions {
        launchers: Launchers {
            python: config.server.python_command.clone(),
            node: config.server.node_command.clone(),
        },
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
    }
}

fn session_options(config: &ConduitConfig) -> SessionOptions {
    SessionOptions::new(&config.model.name)
        .with_max_tokens(config.model.max_tokens)
        .with_persona(&config.prompt.persona)
        .with_result_instruction(&config.prompt.result_instruction)
        .with_persist_answers(config.conversation.persist_answers)
}

fn announce_tool_call(call: &ToolInvocation, _history: &[Turn]) {
    println!("[Calling tool {} with args {}]", call.name, call.input_json());
}

/// Cancel `token` on the first Ctrl-C.
fn watch_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt received");
            token.cancel();
        }
    });
}

/// Connect, then serve queries until the operator leaves.
///
/// The tool server is closed on every path once it has been spawned.
async fn run(args: cli::Args, config: ConduitConfig) -> Result<(), ConduitError> {
    let client = ChatClient::new(chat_config(&config))
        .map_err(|e| ConduitError::Ai(e.to_string()))?;

    let gateway = McpSession::connect(&args.server_script, &connect_options(&config))
        .await
        .map_err(ToolError::from)?;
    println!("\nConnected to server with tools: {:?}", gateway.tool_names());

    let mut session = Session::new(Box::new(client), Box::new(gateway), session_options(&config))
        .map_err(|e| ConduitError::Other(e.to_string()))?
        .with_observer(Box::new(announce_tool_call));

    let shutdown = CancellationToken::new();
    watch_ctrl_c(shutdown.clone());

    repl::run(&mut session, shutdown).await;

    let usage = session.tracker();
    tracing::info!(
        session = %session.id(),
        calls = usage.call_count(),
        input_tokens = usage.total().input_tokens,
        output_tokens = usage.total().output_tokens,
        "token usage"
    );

    session.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = match conduit_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("conduit={}", config.logging.level.as_str()));
    init_logging(&directive);
    tracing::info!("conduit v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
