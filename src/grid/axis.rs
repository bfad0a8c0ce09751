use crate::error::{Parameter, PricingError};

/// `points` evenly spaced values from `min` to `max`, both ends included.
///
/// The last value is exactly `max`. A single point yields `[min]`. Descending
/// ranges (`min > max`) are allowed and produce a descending axis.
///
/// # Examples
/// ```
/// use bs_heatmap::linspace;
///
/// let spots = linspace(80.0, 120.0, 5).unwrap();
/// assert_eq!(spots, vec![80.0, 90.0, 100.0, 110.0, 120.0]);
/// ```
pub fn linspace(min: f64, max: f64, points: usize) -> Result<Vec<f64>, PricingError> {
    if points == 0 {
        return Err(PricingError::invalid(
            Parameter::AxisPoints,
            0.0,
            "at least one point",
        ));
    }
    for bound in [min, max] {
        if !bound.is_finite() {
            return Err(PricingError::invalid(
                Parameter::AxisBound,
                bound,
                "a finite value",
            ));
        }
    }

    if points == 1 {
        return Ok(vec![min]);
    }

    // Weighted form: `max - min` overflows for bounds near ±f64::MAX.
    let last = (points - 1) as f64;
    let mut values: Vec<f64> = (0..points)
        .map(|i| {
            let t = i as f64 / last;
            min * (1.0 - t) + max * t
        })
        .collect();
    values[points - 1] = max;
    Ok(values)
}

/// Inclusive sweep range with an explicit resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRange {
    pub min: f64,
    pub max: f64,
    /// Number of evenly spaced values, including both ends
    #[cfg_attr(feature = "serde", serde(default = "default_points"))]
    pub points: usize,
}

/// Resolution used by the reference dashboard: ten values per axis.
pub const DEFAULT_POINTS: usize = 10;

#[cfg(feature = "serde")]
fn default_points() -> usize {
    DEFAULT_POINTS
}

impl SweepRange {
    pub fn new(min: f64, max: f64, points: usize) -> Self {
        Self { min, max, points }
    }

    /// Range spanning `center * lower` to `center * upper`.
    pub fn around(center: f64, lower: f64, upper: f64, points: usize) -> Self {
        Self::new(center * lower, center * upper, points)
    }

    /// Same bounds, different resolution.
    pub fn with_points(self, points: usize) -> Self {
        Self { points, ..self }
    }

    pub fn values(&self) -> Result<Vec<f64>, PricingError> {
        linspace(self.min, self.max, self.points)
    }
}
