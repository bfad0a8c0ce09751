pub mod bs;
pub mod types;

/// Common traits used by all pricing models
pub mod traits {
    use crate::error::PricingError;
    use crate::models::types::{OptionParameters, PricingResult};

    /// A model that prices a European call/put pair from scalar inputs.
    ///
    /// Implementations must be pure: the grid builder may call `evaluate` from
    /// several threads and relies on identical inputs giving identical outputs.
    pub trait PricingModel: Send + Sync {
        /// Returns the name of the model (e.g., "black-scholes")
        fn model_name(&self) -> &str;

        /// Price both legs, failing on any parameter outside its domain.
        fn evaluate(&self, params: &OptionParameters) -> Result<PricingResult, PricingError>;
    }

    impl<M: PricingModel + ?Sized> PricingModel for &M {
        fn model_name(&self) -> &str {
            (**self).model_name()
        }

        fn evaluate(&self, params: &OptionParameters) -> Result<PricingResult, PricingError> {
            (**self).evaluate(params)
        }
    }
}

/// Numerical helpers shared by the pricing models
pub mod utils {
    use std::f64::consts::FRAC_1_SQRT_2;

    /// Standard normal cumulative distribution function.
    ///
    /// Written in terms of `erfc` so the lower tail keeps full relative
    /// precision instead of cancelling against 1.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }
}
