use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::grid::axis::{SweepRange, DEFAULT_POINTS};
use crate::grid::builder::GridBuilder;
use crate::grid::types::SensitivityGrid;
use crate::models::bs::BlackScholes;
use crate::models::types::OptionParameters;

/// Default spot axis bounds, as multiples of the base spot.
const SPOT_LOWER: f64 = 0.8;
const SPOT_UPPER: f64 = 1.2;
/// Default volatility axis bounds, as multiples of the base volatility.
const VOL_LOWER: f64 = 0.5;
const VOL_UPPER: f64 = 1.5;

/// A complete sweep: the fixed inputs plus both axes.
///
/// Every field is optional in TOML. Missing base fields take the dashboard
/// defaults and a missing axis is centred on the (possibly overridden) base:
///
/// ```toml
/// [base]
/// spot_price = 250.0
/// strike = 240.0
///
/// [volatility]
/// min = 0.1
/// max = 0.6
/// points = 12
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawSweepConfig")]
pub struct SweepConfig {
    /// Strike, maturity and rate held fixed; spot and volatility seed the axes
    pub base: OptionParameters,

    /// Spot axis (grid columns)
    pub spot: SweepRange,

    /// Volatility axis (grid rows)
    pub volatility: SweepRange,
}

#[derive(Deserialize)]
struct RawSweepConfig {
    #[serde(default)]
    base: OptionParameters,
    spot: Option<SweepRange>,
    volatility: Option<SweepRange>,
}

impl From<RawSweepConfig> for SweepConfig {
    fn from(raw: RawSweepConfig) -> Self {
        let reference = SweepConfig::reference(raw.base);
        Self {
            base: raw.base,
            spot: raw.spot.unwrap_or(reference.spot),
            volatility: raw.volatility.unwrap_or(reference.volatility),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::reference(OptionParameters::default())
    }
}

impl SweepConfig {
    /// Ten points per axis, spot 0.8x to 1.2x and volatility 0.5x to 1.5x of `base`.
    pub fn reference(base: OptionParameters) -> Self {
        Self::around(base, DEFAULT_POINTS)
    }

    /// Five points per axis around `base`, for quick checks.
    pub fn coarse(base: OptionParameters) -> Self {
        Self::around(base, 5)
    }

    /// Twenty-five points per axis around `base`, for smooth heatmaps.
    pub fn fine(base: OptionParameters) -> Self {
        Self::around(base, 25)
    }

    fn around(base: OptionParameters, points: usize) -> Self {
        Self {
            base,
            spot: SweepRange::around(base.spot_price, SPOT_LOWER, SPOT_UPPER, points),
            volatility: SweepRange::around(base.volatility, VOL_LOWER, VOL_UPPER, points),
        }
    }

    /// Same bounds on both axes, different resolution.
    pub fn with_resolution(self, points: usize) -> Self {
        Self {
            spot: self.spot.with_points(points),
            volatility: self.volatility.with_points(points),
            ..self
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse sweep config")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize sweep config")
    }

    /// Expand both axes and price the grid with Black-Scholes.
    pub fn run(&self) -> Result<SensitivityGrid> {
        let spots = self.spot.values().context("invalid spot axis")?;
        let vols = self.volatility.values().context("invalid volatility axis")?;
        let grid = GridBuilder::new(BlackScholes)
            .build(&self.base, &spots, &vols)
            .context("sensitivity sweep failed")?;
        Ok(grid)
    }
}
