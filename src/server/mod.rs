pub mod error;
pub mod handlers;
pub mod state;

pub use handlers::CHART_NAME_HEADER;
pub use state::AppState;

use crate::{
    config::Config,
    error::{GenError, Result},
    fal::FalClient,
    logger,
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

/// Registers every route plus the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .route("/", web::get().to(handlers::root))
        .route("/images", web::get().to(handlers::list_images))
        .route("/images/asset/{name}", web::get().to(handlers::asset_image))
        .route(
            "/images/background/{name}",
            web::get().to(handlers::background_image),
        )
        .route("/generate/image", web::post().to(handlers::generate_image))
        .route("/generate/video", web::post().to(handlers::generate_video))
        .route("/generate/audio", web::post().to(handlers::generate_audio))
        .route("/chart/{name}", web::get().to(handlers::get_chart))
        .route("/report/chart", web::post().to(handlers::report_chart));
}

pub async fn run(config: Config, fal: FalClient) -> Result<()> {
    let bind_address = config.bind_address();
    let state = web::Data::new(AppState::from_config(&config, fal));

    logger::log_startup_info(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &bind_address,
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(&bind_address)
    .map_err(|e| GenError::ConfigError(format!("Failed to bind {}: {}", bind_address, e)))?
    .run()
    .await?;

    log::info!("👋 Server stopped");
    Ok(())
}
