// src/models/gbm.rs
//! Geometric Brownian motion under the risk-neutral measure
//!
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! S_T  = S_0 * exp((r - σ²/2)T + σ√T * Z),   Z ~ N(0,1)
//! ```

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Gbm { s0, mu, sigma }
    }

    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }

    /// Terminal price after `t` years for a single normal draw
    pub fn terminal_price(&self, t: f64, normal_draw: f64) -> f64 {
        self.exact_step(self.s0, t, normal_draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_draw_gives_drift_only() {
        let gbm = Gbm::new(100.0, 0.05, 0.2);
        let expected = 100.0 * ((0.05 - 0.02) * 2.0_f64).exp();
        assert_relative_eq!(gbm.terminal_price(2.0, 0.0), expected, max_relative = 1e-14);
    }

    #[test]
    fn test_zero_volatility_is_forward() {
        let gbm = Gbm::new(80.0, 0.03, 0.0);
        for z in [-3.0, 0.0, 1.5] {
            assert_eq!(gbm.terminal_price(1.5, z), 80.0 * (0.03_f64 * 1.5).exp());
        }
    }

    #[test]
    fn test_two_half_steps_match_one_full_step() {
        let gbm = Gbm::new(100.0, 0.01, 0.3);
        let z = 0.7;
        // Same draw on both halves equals a full step with z * sqrt(2)
        let half = gbm.exact_step(gbm.s0, 0.5, z);
        let two_halves = gbm.exact_step(half, 0.5, z);
        let full = gbm.terminal_price(1.0, z * 2.0_f64.sqrt());
        assert_relative_eq!(two_halves, full, max_relative = 1e-12);
    }
}
