use clap::Parser;
use juststream::core::config::{self, JustStreamConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "juststream", about = "Browse the JustStream movie catalog")]
struct Args {
    /// Movie API base URL (overrides config file and JUSTSTREAM_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Config file to use instead of ~/.juststream/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level written to juststream.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to juststream.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("juststream.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        JustStreamConfig::default()
    });
    let resolved = config::resolve(&file_config, args.api_url.as_deref());

    log::info!(
        "JustStream starting up against {} ({} genres)",
        resolved.api_url,
        resolved.genres.len()
    );

    juststream::tui::run(resolved)
}
