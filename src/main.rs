//! hoststat binary: serve host metrics over HTTP, or dump either record
//! once as JSON.

use clap::{Parser, Subcommand};
use hoststat::{
    start_web_server, LiveMetricsProvider, StaticInfoProvider, SysinfoSource, WebConfig,
    DEFAULT_PORT,
};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "hoststat")]
#[command(about = "Minimal host-metrics exporter: OS counters as JSON over HTTP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// HTTP listen address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP listen port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Disable CORS headers
    #[arg(long)]
    no_cors: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP exporter (default)
    Serve,

    /// Collect live utilization once and print it as JSON
    Live,

    /// Collect static host identity once and print it as JSON
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    match cli.command {
        Some(Commands::Live) => live_command().await?,
        Some(Commands::Info) => info_command().await?,
        Some(Commands::Serve) | None => serve_command(&cli).await?,
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

async fn serve_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = WebConfig::new(&cli.host, cli.port).with_cors(!cli.no_cors);

    info!("Bind address: {}", config.bind_address());
    info!("CORS enabled: {}", config.enable_cors);

    start_web_server(config).await?;

    Ok(())
}

async fn live_command() -> Result<(), Box<dyn std::error::Error>> {
    // Same path as the HTTP handler: collection blocks for the sampling
    // window, so it runs off the async executor.
    let metrics =
        tokio::task::spawn_blocking(|| LiveMetricsProvider::new(SysinfoSource::new()).collect())
            .await?;
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}

async fn info_command() -> Result<(), Box<dyn std::error::Error>> {
    let info =
        tokio::task::spawn_blocking(|| StaticInfoProvider::new(SysinfoSource::new()).collect())
            .await?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
