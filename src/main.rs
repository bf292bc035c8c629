use rgenmedia::logger::{self, LoggerConfig};
use rgenmedia::{server, Config, FalClient};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading any configuration from the environment.
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::from_env())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = Config::from_env();
    logger::log_config_info(&config);

    log::info!("🖼️  Available generation models:");
    for model in FalClient::supported_models() {
        log::info!("  {} - {} ({:?})", model.id, model.name, model.category);
    }

    let fal = FalClient::new(config.fal.clone());

    if let Err(e) = server::run(config, fal).await {
        log::error!("❌ Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
