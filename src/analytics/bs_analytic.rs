// src/analytics/bs_analytic.rs
//! Closed-form Black-Scholes price of a European call
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! Used as the reference value for Monte Carlo estimates.

use crate::math_utils::norm_cdf;

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// Where:
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
///
/// With `σ√T = 0` the price collapses to the discounted forward intrinsic
/// value, see [`bs_call_price_zero_vol`].
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let vol_sqrt_t = sigma * t.sqrt();
    if vol_sqrt_t == 0.0 {
        return bs_call_price_zero_vol(s, k, r, t);
    }
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Deterministic limit of the call price:
/// ```text
/// C = max(S*e^(rT) - K, 0) * e^(-rT)
/// ```
pub fn bs_call_price_zero_vol(s: f64, k: f64, r: f64, t: f64) -> f64 {
    (s * (r * t).exp() - k).max(0.0) * (-r * t).exp()
}
