//! The `verdure serve` command: run the HTTP relay.

use clap::Args;
use std::sync::Arc;
use verdure_core::{server, Config, Relay};

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        anyhow::ensure!(port > 0, "--port must be > 0");
        config.server.port = port;
    }

    let relay = Arc::new(Relay::from_config(&config));
    tracing::info!(
        identification = %config.identification.endpoint,
        model = %config.openai.model,
        "Starting Verdure relay"
    );

    server::serve(relay, &config.server).await?;
    Ok(())
}
