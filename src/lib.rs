//! # euro-mc: Monte Carlo pricing of European call options
//!
//! Prices a European call by simulating the terminal price of the underlying
//! under geometric Brownian motion and averaging the discounted payoffs. Every
//! estimate comes with its standard error.
//!
//! ## Quick Start
//!
//! ```rust
//! use euro_mc::mc::pricer::{OptionParams, OptionPricer};
//!
//! let params = OptionParams {
//!     s0: 100.0,      // Spot price
//!     k: 100.0,       // Strike
//!     r: 0.05,        // Risk-free rate
//!     sigma: 0.2,     // Volatility
//!     t: 1.0,         // Time to expiration
//! };
//!
//! // Seeded pricers are fully reproducible; pass `None` to seed from entropy
//! let mut pricer = OptionPricer::new(params, Some(48)).expect("Valid parameters");
//! let result = pricer.calculate_price(100_000).expect("Positive path count");
//! println!("Call price: {:.4} ± {:.4}", result.price, result.std_error);
//! ```
//!
//! ## Reproducibility
//!
//! A seed pins the sequence for a fixed generator and sampler pairing
//! (`StdRng` with `rand_distr::StandardNormal`, see [`rng`]). Prices are
//! bit-identical for the same parameters, seed and path count.

pub mod error;
pub mod rng;
pub mod math_utils;
pub mod models;
pub mod mc;
pub mod analytics;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{PricerError, PricerResult};
pub use mc::pricer::{OptionParams, OptionPricer, SimulationResult};
