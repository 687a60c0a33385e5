// src/rng.rs
//! Random Number Generation for the pricer
//!
//! Every pricer owns one generator. Reproducibility rests on a fixed pairing:
//!
//! - uniform source: [`StdRng`], seeded through [`SeedableRng::seed_from_u64`]
//! - normal sampler: [`StandardNormal`] from `rand_distr` (ziggurat method)
//!
//! Changing either half changes every seeded price, so a reported seed is only
//! meaningful alongside the `rand`/`rand_distr` versions in `Cargo.toml`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Generator type owned by each pricer
pub type PricerRng = StdRng;

/// Deterministic generator from a caller-supplied seed
pub fn seed_rng_from_u64(seed: u64) -> PricerRng {
    StdRng::seed_from_u64(seed)
}

/// Non-deterministic generator seeded from operating-system entropy
pub fn entropy_rng() -> PricerRng {
    StdRng::from_entropy()
}

/// Build the generator for an optional seed
pub fn rng_for_seed(seed: Option<u64>) -> PricerRng {
    match seed {
        Some(seed) => seed_rng_from_u64(seed),
        None => entropy_rng(),
    }
}

/// One standard normal draw, Z ~ N(0,1)
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
