//! # bs-heatmap: Black-Scholes Pricing and Sensitivity Grids
//!
//! `bs-heatmap` prices European call and put options with the closed-form
//! Black-Scholes-Merton model and sweeps the price over a grid of spot prices
//! and volatilities, producing the matrices behind a price heatmap.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put from one evaluation, with an explicit
//!   discounted-intrinsic-value branch when σ√T is zero
//! - **Sensitivity grids**: volatility × spot price matrices with axis labels
//! - **Sweep configuration**: TOML-loadable sweeps with reference presets
//! - **CSV export**: a plain hand-off format for external renderers
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap::{build_grid, evaluate, linspace, OptionParameters};
//!
//! let price = evaluate(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! assert!((price.call_price - 10.4506).abs() < 1e-3);
//! assert!((price.put_price - 5.5735).abs() < 1e-3);
//!
//! let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let spots = linspace(80.0, 120.0, 10)?;
//! let vols = linspace(0.1, 0.3, 10)?;
//! let grid = build_grid(&base, &spots, &vols)?;
//!
//! // Rows follow volatility, columns follow spot.
//! assert_eq!(grid.shape(), (vols.len(), spots.len()));
//! # Ok::<(), bs_heatmap::PricingError>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `serde` (default): serde derives on the value types, plus [`SweepConfig`]
//! - `parallel`: price grid rows on the rayon thread pool
//!
//! ## Logging
//!
//! The library emits `tracing` events (`debug` per sweep, `trace` per row and
//! for the zero-diffusion branch) and never installs a subscriber.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod grid;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Errors
pub use error::{Axis, Parameter, PricingError};

// Pricing model and value types
pub use models::{
    bs::BlackScholes,
    traits::PricingModel,
    types::{OptionKind, OptionParameters, PricingResult},
    utils::norm_cdf,
};

// Sensitivity grids
pub use grid::{
    linspace, write_csv, write_csv_path, GridBuilder, GridParts, SensitivityGrid, SweepRange,
    DEFAULT_POINTS,
};

#[cfg(feature = "serde")]
pub use grid::SweepConfig;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sweeps centred on a base set of parameters.
///
/// Every preset spans spot from 80% to 120% of the base spot and volatility
/// from 50% to 150% of the base volatility; they differ only in resolution.
///
/// - [`reference()`]: 10 × 10, the classic dashboard heatmap
/// - [`coarse()`]: 5 × 5, for quick checks and tests
/// - [`fine()`]: 25 × 25, for smooth rendered heatmaps
#[cfg(feature = "serde")]
pub mod default_configs {
    use crate::grid::config::SweepConfig;
    use crate::models::types::OptionParameters;

    /// Ten points per axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_heatmap::{default_configs, OptionParameters};
    ///
    /// let config = default_configs::reference(OptionParameters::default());
    /// assert_eq!(config.spot.points, 10);
    /// ```
    pub fn reference(base: OptionParameters) -> SweepConfig {
        SweepConfig::reference(base)
    }

    /// Five points per axis.
    pub fn coarse(base: OptionParameters) -> SweepConfig {
        SweepConfig::coarse(base)
    }

    /// Twenty-five points per axis.
    pub fn fine(base: OptionParameters) -> SweepConfig {
        SweepConfig::fine(base)
    }
}

// ================================================================================================
// CORE API
// ================================================================================================

/// Price a European call and put under Black-Scholes.
///
/// # Arguments
///
/// * `spot_price` - Current underlying price, must be > 0
/// * `strike` - Exercise price, must be > 0
/// * `time_to_maturity` - Years to expiry, must be >= 0
/// * `risk_free_rate` - Continuously compounded annual rate
/// * `volatility` - Annualized volatility, must be >= 0
///
/// # Returns
///
/// A [`PricingResult`] with both legs, each >= 0. When `volatility` or
/// `time_to_maturity` is zero the result is the discounted intrinsic value
/// `max(S − K·e^(−rT), 0)` / `max(K·e^(−rT) − S, 0)`.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] for any input outside its domain,
/// including NaN and infinities.
///
/// # Example
///
/// ```rust
/// use bs_heatmap::evaluate;
///
/// let at_expiry = evaluate(110.0, 100.0, 0.0, 0.05, 0.2).unwrap();
/// assert_eq!(at_expiry.call_price, 10.0);
/// assert_eq!(at_expiry.put_price, 0.0);
///
/// assert!(evaluate(-1.0, 100.0, 1.0, 0.05, 0.2).is_err());
/// ```
pub fn evaluate(
    spot_price: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<PricingResult, PricingError> {
    let params = OptionParameters::new(
        spot_price,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
    );
    BlackScholes.evaluate(&params)
}

/// Build call and put price grids over every (volatility, spot) pair.
///
/// `base` supplies strike, maturity and rate; its own spot and volatility are
/// ignored. Cell `[i][j]` is priced at `volatility_values[i]` and
/// `spot_values[j]`, so both result matrices have shape
/// `(volatility_values.len(), spot_values.len())`. Use
/// [`SensitivityGrid::into_parts`] for the plain
/// `(call_grid, put_grid, spot_values, volatility_values)` tuple.
///
/// # Errors
///
/// * [`PricingError::EmptyAxis`] if either axis is empty
/// * [`PricingError::GridCell`] wrapping the first invalid cell in row-major
///   order; no partial grid is returned
pub fn build_grid(
    base: &OptionParameters,
    spot_values: &[f64],
    volatility_values: &[f64],
) -> Result<SensitivityGrid, PricingError> {
    GridBuilder::new(BlackScholes).build(base, spot_values, volatility_values)
}
