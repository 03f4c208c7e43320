mod agents;
mod prompt;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use a2a_relay::a2a::client::A2ARemoteAgent;
use a2a_relay::agent::Relay;
use a2a_relay::config::Settings;
use a2a_relay::systems::A2ASystem;

use crate::prompt::rustyline::RustylinePrompt;
use crate::session::Session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run the built-in test queries instead of the interactive loop
    #[arg(long)]
    test: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("{}", style("Starting A2A relay agent...").bold());

    let config = Settings::new()
        .context("Failed to load configuration")?
        .into_config();
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "loaded configuration");

    let remote_url = config.base_url.clone();
    let system = A2ASystem::new(Box::new(A2ARemoteAgent::new(config)));
    let relay = Relay::from_systems(vec![Box::new(system)])
        .context("Failed to build the agent graph")?;

    let mut session = Session::new(
        Box::new(relay),
        Box::new(RustylinePrompt::new()),
        remote_url,
    );
    if cli.test {
        session.batch_start().await;
    } else {
        session.start().await?;
    }
    Ok(())
}
