// Closed-form Black-Scholes-Merton pricing for European options without
// dividends. Both legs come out of one evaluation so the grid sweep only pays
// for d1/d2 once per cell.

use tracing::trace;

use crate::error::PricingError;
use crate::models::traits::PricingModel;
use crate::models::types::{OptionParameters, PricingResult};
use crate::models::utils::norm_cdf;

/// The Black-Scholes pricing engine.
///
/// Stateless; every call is a pure function of its [`OptionParameters`].
///
/// # Examples
/// ```
/// use bs_heatmap::{BlackScholes, OptionParameters, PricingModel};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let result = BlackScholes.evaluate(&params).unwrap();
///
/// // C - P = S - K*exp(-rT)
/// let parity = result.call_price - result.put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn evaluate(&self, params: &OptionParameters) -> Result<PricingResult, PricingError> {
        params.validate()?;
        Ok(price_unchecked(params))
    }
}

/// d1 and d2, or `None` when σ√T is zero and the formula is undefined.
#[allow(non_snake_case)]
pub fn d1_d2(params: &OptionParameters) -> Option<(f64, f64)> {
    let S = params.spot_price;
    let K = params.strike;
    let T = params.time_to_maturity;
    let r = params.risk_free_rate;
    let sigma = params.volatility;

    let vol_sqrt_t = sigma * T.sqrt();
    if vol_sqrt_t <= 0.0 {
        return None;
    }

    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / vol_sqrt_t;
    Some((d1, d1 - vol_sqrt_t))
}

/// Price both legs of already-validated parameters.
#[allow(non_snake_case)]
fn price_unchecked(params: &OptionParameters) -> PricingResult {
    let S = params.spot_price;
    let discounted_strike = params.strike * params.discount_factor();

    let Some((d1, d2)) = d1_d2(params) else {
        // σ√T = 0: the price collapses to discounted intrinsic value.
        trace!(
            spot = S,
            volatility = params.volatility,
            time_to_maturity = params.time_to_maturity,
            "zero diffusion, using discounted intrinsic value"
        );
        return PricingResult {
            call_price: floor_at_zero(S - discounted_strike),
            put_price: floor_at_zero(discounted_strike - S),
        };
    };

    let call = S * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = discounted_strike * norm_cdf(-d2) - S * norm_cdf(-d1);

    PricingResult {
        call_price: floor_at_zero(call),
        put_price: floor_at_zero(put),
    }
}

/// Clamp rounding noise below zero. NaN passes through, unlike `f64::max`.
fn floor_at_zero(price: f64) -> f64 {
    if price < 0.0 {
        0.0
    } else {
        price
    }
}
