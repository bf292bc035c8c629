//! Generation proxy for fal.ai plus static image serving and success-rate
//! chart rendering, exposed over HTTP with the `server` feature.

pub mod chart;
pub mod config;
pub mod error;
pub mod fal;
pub mod logger;
pub mod models;
#[cfg(feature = "server")]
pub mod server;
pub mod storage;

pub use chart::{ChartRenderer, ChartService, SuccessReport, TypeAggregate};
pub use config::{Config, FalConfig};
pub use error::{GenError, Result};
pub use fal::{AudioClient, FalClient, ImageClient, ProviderQueue, QueueClient, VideoClient};
pub use models::*;
pub use storage::{AssetStore, ChartStore, ImageFolder};
