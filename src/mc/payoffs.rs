//! Option Payoff Functions
//!
//! Only the European call is priced:
//!
//! ```text
//! payoff = max(S_T - K, 0)
//! ```

/// Payoff of the contract at expiry, as a function of the terminal price
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// European call option: max(S_T - K, 0)
    EuropeanCall { k: f64 },
}

impl Payoff {
    /// Non-negative payoff for a terminal price `s_t`
    pub fn calculate(&self, s_t: f64) -> f64 {
        match self {
            Payoff::EuropeanCall { k } => (s_t - k).max(0.0),
        }
    }

    pub fn strike(&self) -> f64 {
        match self {
            Payoff::EuropeanCall { k } => *k,
        }
    }
}
