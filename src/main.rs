use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_lookup::{config::Config, services::RecordStore, web::WebServer};

#[derive(Parser)]
#[command(name = "student-lookup")]
#[command(version)]
#[command(about = "Lookup service for graduation records")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Student data file (overrides config file)
    #[arg(short = 'd', long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("student_lookup={},tower_http=trace", cli.log_level)
    } else {
        format!("student_lookup={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Student Lookup Service v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(data_file) = cli.data_file {
        config.data.path = data_file;
    }

    info!(
        "Serving student data from {} (cache ttl {})",
        config.data.path.display(),
        humantime::format_duration(config.data.cache_ttl)
    );
    if config.data.serve_stale_on_error {
        info!("Stale snapshots will be served when a reload fails");
    }

    let record_store = Arc::new(RecordStore::from_config(&config.data)?);

    let web_server = WebServer::new(config, record_store)?;
    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
