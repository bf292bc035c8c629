pub mod assets;
pub mod charts;

pub use assets::{AssetStore, ImageFolder};
pub use charts::{chart_file_name, ChartStore};
