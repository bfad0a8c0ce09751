use tracing::{debug, trace, warn};

use crate::error::{Axis, PricingError};
use crate::grid::types::SensitivityGrid;
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::models::types::OptionParameters;

/// One volatility row: call prices and put prices across the spot axis.
type Row = (Vec<f64>, Vec<f64>);

/// Sweeps a pricing model over a volatility × spot cross-product.
///
/// Strike, maturity and rate come from the base parameters and stay fixed for
/// the whole sweep; only spot and volatility vary.
///
/// # Examples
/// ```
/// use bs_heatmap::{BlackScholes, GridBuilder, OptionParameters};
///
/// let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let grid = GridBuilder::new(BlackScholes)
///     .build(&base, &[90.0, 100.0, 110.0], &[0.1, 0.2])
///     .unwrap();
///
/// assert_eq!(grid.shape(), (2, 3));
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder<M = BlackScholes> {
    model: M,
}

impl Default for GridBuilder<BlackScholes> {
    fn default() -> Self {
        Self::new(BlackScholes)
    }
}

impl<M: PricingModel> GridBuilder<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Price every `(volatility_values[i], spot_values[j])` cell.
    ///
    /// Values are not pre-validated. The first failing cell in row-major order
    /// aborts the sweep and is reported as [`PricingError::GridCell`]; no
    /// partial grid is returned.
    pub fn build(
        &self,
        base: &OptionParameters,
        spot_values: &[f64],
        volatility_values: &[f64],
    ) -> Result<SensitivityGrid, PricingError> {
        if spot_values.is_empty() {
            return Err(PricingError::EmptyAxis { axis: Axis::Spot });
        }
        if volatility_values.is_empty() {
            return Err(PricingError::EmptyAxis {
                axis: Axis::Volatility,
            });
        }

        debug!(
            model = self.model.model_name(),
            rows = volatility_values.len(),
            cols = spot_values.len(),
            strike = base.strike,
            time_to_maturity = base.time_to_maturity,
            risk_free_rate = base.risk_free_rate,
            "building sensitivity grid"
        );

        let rows = self.sweep(base, spot_values, volatility_values).map_err(|err| {
            warn!(error = %err, "sensitivity grid aborted");
            err
        })?;

        let (call_prices, put_prices): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        debug!("sensitivity grid complete");

        Ok(SensitivityGrid::from_rows(
            call_prices,
            put_prices,
            spot_values.to_vec(),
            volatility_values.to_vec(),
        ))
    }

    #[cfg(not(feature = "parallel"))]
    fn sweep(
        &self,
        base: &OptionParameters,
        spot_values: &[f64],
        volatility_values: &[f64],
    ) -> Result<Vec<Row>, PricingError> {
        volatility_values
            .iter()
            .enumerate()
            .map(|(i, &vol)| self.price_row(base, i, vol, spot_values))
            .collect()
    }

    /// Rows run on the rayon pool. Results are collected in row order before
    /// the first error is taken, so the reported cell matches the sequential
    /// sweep.
    #[cfg(feature = "parallel")]
    fn sweep(
        &self,
        base: &OptionParameters,
        spot_values: &[f64],
        volatility_values: &[f64],
    ) -> Result<Vec<Row>, PricingError> {
        use rayon::prelude::*;

        let rows: Vec<Result<Row, PricingError>> = volatility_values
            .par_iter()
            .enumerate()
            .map(|(i, &vol)| self.price_row(base, i, vol, spot_values))
            .collect();

        rows.into_iter().collect()
    }

    fn price_row(
        &self,
        base: &OptionParameters,
        row: usize,
        volatility: f64,
        spot_values: &[f64],
    ) -> Result<Row, PricingError> {
        trace!(row, volatility, "pricing grid row");

        let mut calls = Vec::with_capacity(spot_values.len());
        let mut puts = Vec::with_capacity(spot_values.len());

        for (col, &spot) in spot_values.iter().enumerate() {
            let params = base.with_spot(spot).with_volatility(volatility);
            let result =
                self.model
                    .evaluate(&params)
                    .map_err(|source| PricingError::GridCell {
                        row,
                        col,
                        source: Box::new(source),
                    })?;
            calls.push(result.call_price);
            puts.push(result.put_price);
        }

        Ok((calls, puts))
    }
}
