pub mod assets;
pub mod chart;
pub mod common;
pub mod generation;

pub use assets::*;
pub use chart::*;
pub use common::*;
pub use generation::*;
