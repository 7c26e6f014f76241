use clap::{Parser, ValueEnum};

use server_config::load_config;
use server_config::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "config-dump")]
#[command(about = "Load a server configuration and print the parsed tree", long_about = None)]
struct Cli {
    /// Configuration location, e.g. ./config.yaml (relative to the working directory)
    location: String,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Log filter directive, overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let config = load_config(&cli.location)?;

    tracing::info!(
        port = %config.server.port,
        routers = config.server.routers.len(),
        "Configuration parsed"
    );

    match cli.format {
        Format::Yaml => print!("{}", config.to_yaml()?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
