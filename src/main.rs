use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chat_relay::{serve, Commands, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "chat-relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // A missing .env is fine; the key may already be exported.
    if dotenvy::dotenv().is_err() {
        info!("No .env file found");
    }

    match cli.command {
        Commands::Serve {
            port,
            public,
            templates_dir,
            upstream_url,
            api_key_env,
        } => {
            let container = Container::new(ContainerConfig {
                upstream_url,
                api_key_env,
                templates_dir,
            })?;

            let ip = if public {
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            } else {
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            };
            serve(Arc::new(container), SocketAddr::new(ip, port)).await?;
        }
    }

    Ok(())
}
