//! Spot × volatility sensitivity grids
//!
//! Builds the call and put price matrices a heatmap renderer consumes, plus
//! the axis, configuration and export helpers around them.

pub mod axis;
pub mod builder;
#[cfg(feature = "serde")]
pub mod config;
pub mod export;
pub mod types;

pub use axis::{linspace, SweepRange, DEFAULT_POINTS};
pub use builder::GridBuilder;
#[cfg(feature = "serde")]
pub use config::SweepConfig;
pub use export::{write_csv, write_csv_path};
pub use types::{GridParts, SensitivityGrid};
