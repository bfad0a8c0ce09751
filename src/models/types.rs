use crate::error::{Parameter, PricingError};

/// Option leg selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    Call,
    Put,
}

/// Inputs to a single Black-Scholes evaluation.
///
/// A plain value object: construct it, price it, derive a new one for the next
/// cell. Nothing is validated at construction; [`OptionParameters::validate`]
/// runs the same checks the pricing engine applies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptionParameters {
    /// Current underlying price (S), must be > 0
    pub spot_price: f64,
    /// Exercise price (K), must be > 0
    pub strike: f64,
    /// Years until expiry (T), must be >= 0
    pub time_to_maturity: f64,
    /// Continuously compounded annual rate (r), any finite sign
    pub risk_free_rate: f64,
    /// Annualized volatility of log-returns (σ), must be >= 0
    pub volatility: f64,
}

impl Default for OptionParameters {
    fn default() -> Self {
        Self {
            spot_price: 100.0,
            strike: 100.0,
            time_to_maturity: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl OptionParameters {
    pub fn new(
        spot_price: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot_price,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
        }
    }

    /// Copy with a different spot price.
    pub fn with_spot(self, spot_price: f64) -> Self {
        Self { spot_price, ..self }
    }

    /// Copy with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Check every domain constraint, reporting the first violation.
    ///
    /// Non-finite values are rejected for all fields. Zero maturity and zero
    /// volatility are valid; they select the intrinsic-value branch.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot_price.is_finite() && self.spot_price > 0.0) {
            return Err(PricingError::invalid(
                Parameter::SpotPrice,
                self.spot_price,
                "a finite value > 0",
            ));
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(PricingError::invalid(
                Parameter::Strike,
                self.strike,
                "a finite value > 0",
            ));
        }
        if !(self.time_to_maturity.is_finite() && self.time_to_maturity >= 0.0) {
            return Err(PricingError::invalid(
                Parameter::TimeToMaturity,
                self.time_to_maturity,
                "a finite value >= 0",
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::invalid(
                Parameter::RiskFreeRate,
                self.risk_free_rate,
                "a finite value",
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(PricingError::invalid(
                Parameter::Volatility,
                self.volatility,
                "a finite value >= 0",
            ));
        }
        Ok(())
    }

    /// Discount factor e^(−rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

/// Call and put fair values for one set of [`OptionParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
}

impl PricingResult {
    pub fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_price,
            OptionKind::Put => self.put_price,
        }
    }
}

impl From<PricingResult> for (f64, f64) {
    fn from(result: PricingResult) -> Self {
        (result.call_price, result.put_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_degenerate_inputs() {
        assert!(OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2)
            .validate()
            .is_ok());
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.01, 0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_reports_offending_field() {
        let cases = [
            (OptionParameters::new(0.0, 100.0, 1.0, 0.05, 0.2), Parameter::SpotPrice),
            (OptionParameters::new(100.0, -5.0, 1.0, 0.05, 0.2), Parameter::Strike),
            (OptionParameters::new(100.0, 100.0, -0.1, 0.05, 0.2), Parameter::TimeToMaturity),
            (OptionParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2), Parameter::RiskFreeRate),
            (OptionParameters::new(100.0, 100.0, 1.0, 0.05, -0.2), Parameter::Volatility),
            (OptionParameters::new(f64::INFINITY, 100.0, 1.0, 0.05, 0.2), Parameter::SpotPrice),
        ];

        for (params, expected) in cases {
            match params.validate() {
                Err(PricingError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected, "{params:?}")
                }
                other => panic!("expected InvalidParameter for {params:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_with_spot_and_volatility_keep_other_fields() {
        let base = OptionParameters::default();
        let derived = base.with_spot(120.0).with_volatility(0.35);
        assert_eq!(derived.spot_price, 120.0);
        assert_eq!(derived.volatility, 0.35);
        assert_eq!(derived.strike, base.strike);
        assert_eq!(derived.time_to_maturity, base.time_to_maturity);
        assert_eq!(derived.risk_free_rate, base.risk_free_rate);
    }
}
