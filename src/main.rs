use anyhow::Result;
use thrifty::config::Config;
use thrifty::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::setup_logging(&config.logging)?;
    log::info!("Starting thrifty {}", env!("CARGO_PKG_VERSION"));

    ui::run_app(config).await
}
