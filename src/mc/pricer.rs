// src/mc/pricer.rs
//! Monte Carlo pricer for European call options under GBM
//!
//! # Math Framework
//!
//! Each path draws one `Z ~ N(0,1)` and jumps straight to expiry with the
//! exact GBM solution:
//! ```text
//! S_T = S_0 * exp((r - σ²/2)T + σ√T * Z)
//! ```
//! The discounted payoff `e^(-rT) * max(S_T - K, 0)` is averaged over all
//! paths. The spread of the discounted payoffs gives the standard error:
//! ```text
//! s  = sqrt( Σ(X_i - X̄)² / (N - 1) )
//! SE = s / √N
//! ```

use crate::error::{validation::*, PricerError, PricerResult};
use crate::mc::payoffs::Payoff;
use crate::models::gbm::Gbm;
use crate::math_utils::RunningStats;
use crate::rng::{self, PricerRng};
use std::fmt;
use tracing::{debug, debug_span, warn};

/// Market and contract parameters of a European call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams {
    /// Spot price of the underlying at time 0
    pub s0: f64,
    /// Strike price
    pub k: f64,
    /// Continuously-compounded risk-free rate
    pub r: f64,
    /// Annualized volatility of the log-return
    pub sigma: f64,
    /// Time to expiry in years
    pub t: f64,
}

impl OptionParams {
    /// Validate the option parameters
    pub fn validate(&self) -> PricerResult<()> {
        validate_positive("s0", self.s0)?;
        validate_positive("k", self.k)?;
        validate_finite("r", self.r)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_positive("t", self.t)?;
        Ok(())
    }

    /// Discount factor `e^(-rT)`
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.t).exp()
    }
}

impl Default for OptionParams {
    fn default() -> Self {
        OptionParams {
            s0: 100.0,
            k: 100.0,
            r: 0.05,
            sigma: 0.2,
            t: 1.0,
        }
    }
}

/// Price estimate and its standard error from one pricing run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub price: f64,
    pub std_error: f64,
}

impl From<SimulationResult> for (f64, f64) {
    fn from(result: SimulationResult) -> Self {
        (result.price, result.std_error)
    }
}

/// European call pricer owning its own random stream.
///
/// The contract parameters are fixed at construction. Only the generator
/// changes afterwards: every call to [`calculate_price`](Self::calculate_price)
/// continues the stream where the previous call left off.
pub struct OptionPricer {
    params: OptionParams,
    model: Gbm,
    payoff: Payoff,
    discount: f64,
    seed: Option<u64>,
    rng: PricerRng,
}

impl OptionPricer {
    /// Build a pricer, seeding the generator from `seed` or, if `None`, from
    /// operating-system entropy.
    ///
    /// # Errors
    ///
    /// [`PricerError::InvalidParameter`] when `s0`, `k` or `t` is not positive,
    /// `sigma` is negative, or any parameter is not finite.
    pub fn new(params: OptionParams, seed: Option<u64>) -> PricerResult<Self> {
        params.validate()?;

        match seed {
            Some(seed) => debug!(seed, ?params, "creating seeded option pricer"),
            None => debug!(?params, "creating entropy-seeded option pricer"),
        }

        Ok(OptionPricer {
            params,
            model: Gbm::new(params.s0, params.r, params.sigma),
            payoff: Payoff::EuropeanCall { k: params.k },
            discount: params.discount_factor(),
            seed,
            rng: rng::rng_for_seed(seed),
        })
    }

    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// Seed the pricer was built with; `None` for entropy-seeded pricers
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Run `num_simulations` independent paths and return the discounted
    /// mean payoff with its standard error.
    ///
    /// Consumes exactly one standard normal draw per path. A single path
    /// yields a standard error of 0.
    ///
    /// # Errors
    ///
    /// [`PricerError::InvalidSampleCount`] for a count of 0, raised before
    /// the generator is touched.
    pub fn calculate_price(&mut self, num_simulations: usize) -> PricerResult<SimulationResult> {
        if num_simulations == 0 {
            return Err(PricerError::InvalidSampleCount { count: 0 });
        }
        if num_simulations == 1 {
            warn!("pricing with a single path; standard error is reported as 0");
        }

        let span = debug_span!("calculate_price", paths = num_simulations);
        let _guard = span.enter();

        let mut stats = RunningStats::new();
        for _ in 0..num_simulations {
            let z = rng::get_normal_draw(&mut self.rng);
            let s_t = self.model.terminal_price(self.params.t, z);
            stats.push(self.discount * self.payoff.calculate(s_t));
        }

        let result = SimulationResult {
            price: stats.mean(),
            std_error: stats.standard_error(),
        };
        debug!(price = result.price, std_error = result.std_error, "pricing run complete");

        Ok(result)
    }
}

impl fmt::Debug for OptionPricer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionPricer")
            .field("params", &self.params)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params_are_valid() {
        assert!(OptionParams::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let cases = [
            ("s0", OptionParams { s0: 0.0, ..Default::default() }),
            ("k", OptionParams { k: -100.0, ..Default::default() }),
            ("t", OptionParams { t: 0.0, ..Default::default() }),
            ("sigma", OptionParams { sigma: -0.2, ..Default::default() }),
            ("r", OptionParams { r: f64::NAN, ..Default::default() }),
        ];

        for (name, params) in cases {
            match OptionPricer::new(params, Some(1)) {
                Err(PricerError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, name)
                }
                other => panic!("expected InvalidParameter for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_zero_paths_rejected_without_consuming_draws() {
        let mut pricer = OptionPricer::new(OptionParams::default(), Some(7)).unwrap();
        let mut fresh = OptionPricer::new(OptionParams::default(), Some(7)).unwrap();

        assert_eq!(
            pricer.calculate_price(0),
            Err(PricerError::InvalidSampleCount { count: 0 })
        );
        assert_eq!(
            pricer.calculate_price(1_000).unwrap(),
            fresh.calculate_price(1_000).unwrap()
        );
    }

    #[test]
    fn test_single_path_has_zero_std_error() {
        let mut pricer = OptionPricer::new(OptionParams::default(), Some(3)).unwrap();
        let result = pricer.calculate_price(1).unwrap();
        assert!(result.price >= 0.0);
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_price_matches_manual_replay_of_stream() {
        let params = OptionParams::default();
        let mut pricer = OptionPricer::new(params, Some(11)).unwrap();
        let result = pricer.calculate_price(500).unwrap();

        let mut rng = rng::seed_rng_from_u64(11);
        let discount = (-params.r * params.t).exp();
        let payoffs: Vec<f64> = (0..500)
            .map(|_| {
                let z = rng::get_normal_draw(&mut rng);
                let s_t = params.s0
                    * ((params.r - 0.5 * params.sigma * params.sigma) * params.t
                        + params.sigma * params.t.sqrt() * z)
                        .exp();
                discount * (s_t - params.k).max(0.0)
            })
            .collect();

        let n = payoffs.len() as f64;
        let mean = payoffs.iter().sum::<f64>() / n;
        let var = payoffs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

        assert_relative_eq!(result.price, mean, max_relative = 1e-10);
        assert_relative_eq!(result.std_error, (var / n).sqrt(), max_relative = 1e-10);
    }

    #[test]
    fn test_consecutive_calls_advance_the_stream() {
        let mut pricer = OptionPricer::new(OptionParams::default(), Some(5)).unwrap();
        let first = pricer.calculate_price(1_000).unwrap();
        let second = pricer.calculate_price(1_000).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_result_into_tuple() {
        let result = SimulationResult { price: 10.5, std_error: 0.05 };
        let (price, std_error): (f64, f64) = result.into();
        assert_eq!(price, 10.5);
        assert_eq!(std_error, 0.05);
    }

    #[test]
    fn test_debug_reports_seed() {
        let pricer = OptionPricer::new(OptionParams::default(), Some(48)).unwrap();
        let debug = format!("{:?}", pricer);
        assert!(debug.contains("48"));
        assert_eq!(pricer.seed(), Some(48));
        assert_eq!(pricer.params().k, 100.0);
    }
}
