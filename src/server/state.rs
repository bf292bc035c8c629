use crate::{chart::ChartService, config::Config, fal::FalClient, storage::AssetStore};

/// Shared by every worker; all members are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub assets: AssetStore,
    pub charts: ChartService,
    pub fal: FalClient,
}

impl AppState {
    pub fn new(assets: AssetStore, charts: ChartService, fal: FalClient) -> Self {
        Self {
            assets,
            charts,
            fal,
        }
    }

    pub fn from_config(config: &Config, fal: FalClient) -> Self {
        Self::new(
            AssetStore::new(&config.images_dir),
            ChartService::from_config(config),
            fal,
        )
    }
}
