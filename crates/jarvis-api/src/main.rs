//! Jarvis CLI and HTTP server entry point.
//!
//! Binary name: `jarvis`
//!
//! Parses CLI arguments, loads configuration, then starts the chat server,
//! the terminal chat, or answers a single question.

mod cli;
mod http;
mod state;
mod turn;

use clap::Parser;
use clap_complete::generate;

use cli::chat::loop_runner::{ChatBackend, run_chat_loop};
use cli::chat::remote::RemoteClient;
use cli::{Cli, Commands, ConfigOverrides};
use jarvis_infra::config::{load_effective_config, resolve_config_dir};
use jarvis_observe::tracing_setup;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "jarvis", &mut std::io::stdout());
        return Ok(());
    }

    tracing_setup::init_tracing(tracing_setup::verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config_dir = resolve_config_dir();
    let config = load_effective_config(&config_dir).await?;
    tracing::debug!(config_dir = %config_dir.display(), ?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve {
            port,
            host,
            web_dir,
            no_delay,
        } => {
            let config = ConfigOverrides {
                host,
                port,
                web_dir,
                no_delay,
            }
            .apply(config);
            cli::serve::run_server(AppState::new(config), cli.quiet).await
        }

        Commands::Chat { server, no_delay } => {
            let backend = match server {
                Some(url) => ChatBackend::Remote(RemoteClient::new(&url)?),
                None => {
                    let config = ConfigOverrides {
                        no_delay,
                        ..ConfigOverrides::default()
                    }
                    .apply(config);
                    ChatBackend::Local(AppState::new(config))
                }
            };
            run_chat_loop(backend).await
        }

        Commands::Ask { message } => {
            let config = ConfigOverrides {
                no_delay: true,
                ..ConfigOverrides::default()
            }
            .apply(config);
            cli::ask::ask(&AppState::new(config), &message.join(" "), cli.json).await
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    tracing_setup::shutdown_tracing();
    result
}
