//! CLI command definitions for the `jarvis` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod serve;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use jarvis_types::config::{JarvisConfig, ThinkingDelayConfig};

/// Jarvis, an emotional companion that answers in a cheerful, calm or
/// serious tone.
#[derive(Parser)]
#[command(name = "jarvis", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP chat server.
    Serve {
        /// Port to listen on [default: 3000].
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 127.0.0.1].
        #[arg(long)]
        host: Option<String>,

        /// Directory of a built browser client to serve alongside the API.
        #[arg(long)]
        web_dir: Option<String>,

        /// Reply immediately instead of simulating thinking time.
        #[arg(long)]
        no_delay: bool,
    },

    /// Talk to Jarvis in the terminal.
    #[command(alias = "talk")]
    Chat {
        /// Base URL of a running Jarvis server (e.g. http://127.0.0.1:3000).
        /// Without it, replies are computed in-process.
        #[arg(long)]
        server: Option<String>,

        /// Reply immediately instead of simulating thinking time.
        #[arg(long)]
        no_delay: bool,
    },

    /// Ask a single question and print the reply.
    Ask {
        /// The message to send.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Command-line values that take priority over file and environment config.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub web_dir: Option<String>,
    pub no_delay: bool,
}

impl ConfigOverrides {
    /// Apply the overrides on top of an already-loaded config.
    pub fn apply(self, mut config: JarvisConfig) -> JarvisConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(web_dir) = self.web_dir {
            config.server.web_dir = Some(web_dir);
        }
        if self.no_delay {
            config.thinking_delay = ThinkingDelayConfig::disabled();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from(["jarvis", "-v", "serve", "--port", "8080", "--no-delay"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Serve { port, host, no_delay, .. } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host, None);
                assert!(no_delay);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_ask_joins_words() {
        let cli = Cli::try_parse_from(["jarvis", "ask", "what", "time", "is", "it", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Ask { message } => assert_eq!(message.join(" "), "what time is it"),
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_ask_requires_message() {
        assert!(Cli::try_parse_from(["jarvis", "ask"]).is_err());
    }

    #[test]
    fn test_overrides_win_over_config() {
        let config = ConfigOverrides {
            host: Some("0.0.0.0".to_string()),
            port: Some(9001),
            web_dir: Some("web/dist".to_string()),
            no_delay: true,
        }
        .apply(JarvisConfig::default());

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.web_dir.as_deref(), Some("web/dist"));
        assert!(config.thinking_delay.is_disabled());
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let config = ConfigOverrides::default().apply(JarvisConfig::default());
        assert_eq!(config, JarvisConfig::default());
    }
}
