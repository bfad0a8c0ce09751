use crate::models::types::OptionKind;

/// Call and put prices over a volatility × spot cross-product.
///
/// Row `i` corresponds to `volatility_values()[i]` and column `j` to
/// `spot_values()[j]`. Renderers depend on this layout; it never transposes.
///
/// Deserialization checks the same shape invariant, so a ragged or
/// mislabelled grid is rejected instead of panicking on lookup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSensitivityGrid"))]
pub struct SensitivityGrid {
    call_prices: Vec<Vec<f64>>,
    put_prices: Vec<Vec<f64>>,
    spot_values: Vec<f64>,
    volatility_values: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSensitivityGrid {
    call_prices: Vec<Vec<f64>>,
    put_prices: Vec<Vec<f64>>,
    spot_values: Vec<f64>,
    volatility_values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSensitivityGrid> for SensitivityGrid {
    type Error = String;

    fn try_from(raw: RawSensitivityGrid) -> Result<Self, Self::Error> {
        let rows = raw.volatility_values.len();
        let cols = raw.spot_values.len();
        for (leg, prices) in [("call", &raw.call_prices), ("put", &raw.put_prices)] {
            if prices.len() != rows {
                return Err(format!(
                    "{leg} grid has {} rows, expected {rows} (one per volatility)",
                    prices.len()
                ));
            }
            if let Some(i) = prices.iter().position(|row| row.len() != cols) {
                return Err(format!(
                    "{leg} grid row {i} has {} columns, expected {cols} (one per spot)",
                    prices[i].len()
                ));
            }
        }
        Ok(Self {
            call_prices: raw.call_prices,
            put_prices: raw.put_prices,
            spot_values: raw.spot_values,
            volatility_values: raw.volatility_values,
        })
    }
}

/// `(call_grid, put_grid, spot_values, volatility_values)`
pub type GridParts = (Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<f64>, Vec<f64>);

impl SensitivityGrid {
    /// Assemble a grid from rows already laid out as volatility × spot.
    pub(crate) fn from_rows(
        call_prices: Vec<Vec<f64>>,
        put_prices: Vec<Vec<f64>>,
        spot_values: Vec<f64>,
        volatility_values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(call_prices.len(), volatility_values.len());
        debug_assert_eq!(put_prices.len(), volatility_values.len());
        debug_assert!(call_prices.iter().all(|row| row.len() == spot_values.len()));
        Self {
            call_prices,
            put_prices,
            spot_values,
            volatility_values,
        }
    }

    /// `(rows, cols)` = `(volatility_values.len(), spot_values.len())`
    pub fn shape(&self) -> (usize, usize) {
        (self.volatility_values.len(), self.spot_values.len())
    }

    pub fn call(&self, row: usize, col: usize) -> f64 {
        self.call_prices[row][col]
    }

    pub fn put(&self, row: usize, col: usize) -> f64 {
        self.put_prices[row][col]
    }

    pub fn call_prices(&self) -> &[Vec<f64>] {
        &self.call_prices
    }

    pub fn put_prices(&self) -> &[Vec<f64>] {
        &self.put_prices
    }

    pub fn prices(&self, kind: OptionKind) -> &[Vec<f64>] {
        match kind {
            OptionKind::Call => &self.call_prices,
            OptionKind::Put => &self.put_prices,
        }
    }

    /// Column labels.
    pub fn spot_values(&self) -> &[f64] {
        &self.spot_values
    }

    /// Row labels.
    pub fn volatility_values(&self) -> &[f64] {
        &self.volatility_values
    }

    /// Smallest and largest price of one leg, for colour scaling.
    pub fn price_range(&self, kind: OptionKind) -> (f64, f64) {
        self.prices(kind)
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            })
    }

    pub fn into_parts(self) -> GridParts {
        (
            self.call_prices,
            self.put_prices,
            self.spot_values,
            self.volatility_values,
        )
    }
}
