pub mod payoffs;
pub mod pricer;
