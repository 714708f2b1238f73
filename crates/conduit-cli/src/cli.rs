use std::path::PathBuf;

use clap::Parser;

/// conduit: answer questions with an LLM and the tools of an MCP server.
#[derive(Parser, Debug)]
#[command(name = "conduit", version, about)]
pub struct Args {
    /// Tool server script to launch (.py or .js).
    pub server_script: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. debug, conduit_mcp=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_script_is_required() {
        assert!(Args::try_parse_from(["conduit"]).is_err());
    }

    #[test]
    fn parses_all_arguments() {
        let args = Args::try_parse_from([
            "conduit",
            "weather.py",
            "--config",
            "/tmp/conduit.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.server_script, PathBuf::from("weather.py"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/conduit.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
