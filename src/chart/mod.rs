pub mod aggregate;
pub mod fonts;
pub mod render;

pub use aggregate::{SuccessReport, TypeAggregate, SUCCESS_STATUS};
pub use render::{Bar, ChartLayout, ChartRenderer};

use crate::{
    config::Config,
    error::Result,
    logger,
    models::{ChartArtifact, ChartRequest},
    storage::ChartStore,
};

/// Aggregates a [`ChartRequest`], renders it and stores the PNG.
#[derive(Debug, Clone)]
pub struct ChartService {
    store: ChartStore,
    renderer: ChartRenderer,
}

impl ChartService {
    pub fn new(store: ChartStore, renderer: ChartRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ChartStore::new(&config.chart_dir),
            ChartRenderer::new().with_font(config.chart_font.clone()),
        )
    }

    pub fn store(&self) -> &ChartStore {
        &self.store
    }

    /// Blocking: draws and writes the file. Call from a blocking context.
    pub fn report(&self, request: &ChartRequest) -> Result<ChartArtifact> {
        if !request.is_balanced() {
            log::warn!(
                "Chart request has {} types but {} statuses, extra entries are ignored",
                request.types.len(),
                request.statuses.len()
            );
        }

        let report = SuccessReport::from_records(&request.types, &request.statuses);
        let artifact = self.store.allocate()?;

        let timer = logger::timer(&format!("Chart {}", artifact.name));
        self.renderer.render(&report, &artifact.path)?;
        timer.stop();

        Ok(artifact)
    }
}
