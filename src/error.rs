//! Error types for pricing and grid construction.
//!
//! Every failure the core can produce is a violated parameter precondition.
//! The variants differ only in how much context they carry;
//! [`PricingError::parameter`] names the offending input when there is one.

use std::fmt;

use thiserror::Error;

/// The pricing input a precondition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    SpotPrice,
    Strike,
    TimeToMaturity,
    RiskFreeRate,
    Volatility,
    /// Number of points requested for a sweep axis.
    AxisPoints,
    /// Lower or upper bound of a sweep axis.
    AxisBound,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::SpotPrice => "spot price",
            Parameter::Strike => "strike",
            Parameter::TimeToMaturity => "time to maturity",
            Parameter::RiskFreeRate => "risk-free rate",
            Parameter::Volatility => "volatility",
            Parameter::AxisPoints => "axis points",
            Parameter::AxisBound => "axis bound",
        };
        f.write_str(name)
    }
}

/// Which axis of a sensitivity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Spot,
    Volatility,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Spot => f.write_str("spot"),
            Axis::Volatility => f.write_str("volatility"),
        }
    }
}

/// Pricing and grid construction errors.
///
/// # Examples
/// ```
/// use bs_heatmap::{evaluate, Parameter};
///
/// let err = evaluate(-1.0, 100.0, 1.0, 0.05, 0.2).unwrap_err();
/// assert_eq!(err.parameter(), Some(Parameter::SpotPrice));
/// assert!(err.to_string().contains("spot price"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A scalar input is outside its domain.
    #[error("invalid {parameter}: {value} (expected {constraint})")]
    InvalidParameter {
        parameter: Parameter,
        value: f64,
        constraint: &'static str,
    },

    /// A grid cell failed; `row` indexes volatility, `col` indexes spot.
    #[error("grid cell (row {row}, col {col}) failed: {source}")]
    GridCell {
        row: usize,
        col: usize,
        #[source]
        source: Box<PricingError>,
    },

    /// A sweep axis has no values.
    #[error("{axis} axis is empty")]
    EmptyAxis { axis: Axis },
}

impl PricingError {
    pub(crate) fn invalid(parameter: Parameter, value: f64, constraint: &'static str) -> Self {
        PricingError::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }

    /// The scalar input that failed its check, looking through grid context.
    ///
    /// `None` for [`PricingError::EmptyAxis`], which is about an axis as a
    /// whole rather than one value.
    pub fn parameter(&self) -> Option<Parameter> {
        match self.root_cause() {
            PricingError::InvalidParameter { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }

    /// Grid coordinate `(row, col)` of the failing cell, if this came from a sweep.
    pub fn cell(&self) -> Option<(usize, usize)> {
        match self {
            PricingError::GridCell { row, col, .. } => Some((*row, *col)),
            _ => None,
        }
    }

    /// The innermost parameter violation, unwrapping grid context.
    pub fn root_cause(&self) -> &PricingError {
        match self {
            PricingError::GridCell { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
