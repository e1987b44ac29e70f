use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Gatepost visitor dashboard server.
#[derive(Parser, Debug)]
#[command(name = "gatepost", version)]
struct Args {
    /// Path to the TOML config file (overrides GATEPOST_CONFIG)
    #[arg(short, long)]
    config: Option<String>,

    /// Listen address (overrides GATEPOST_BIND_ADDR)
    #[arg(short, long)]
    bind: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let (plain, structured) = if json {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(structured)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    if let Some(path) = &args.config {
        std::env::set_var("GATEPOST_CONFIG", path);
    }
    if let Some(bind) = &args.bind {
        std::env::set_var("GATEPOST_BIND_ADDR", bind);
    }

    gatepost_bootstrap::run_standalone().await
}
