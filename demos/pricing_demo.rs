// demos/pricing_demo.rs
use euro_mc::analytics::bs_analytic;
use euro_mc::error::validation::validate_sample_count;
use euro_mc::math_utils::Timer;
use euro_mc::{OptionParams, OptionPricer, PricerError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("euro-mc Pricing Demo");
    println!("====================\n");

    let params = OptionParams::default();
    let analytic = bs_analytic::bs_call_price(params.s0, params.k, params.r, params.sigma, params.t);

    // 1. Price the at-the-money call
    println!("1. At-the-money call {:?}", params);
    let mut pricer = OptionPricer::new(params, Some(48)).expect("Valid parameters");
    for paths in [1_000, 100_000, 1_000_000] {
        let mut timer = Timer::new();
        timer.start();
        let result = pricer.calculate_price(paths).expect("Positive path count");
        println!(
            "   {:>9} paths: {:.4} ± {:.4}  (analytic {:.4}, {:.1} ms)",
            paths,
            result.price,
            result.std_error,
            analytic,
            timer.elapsed_ms()
        );
    }

    // 2. Same seed, same answer
    println!("\n2. Reproducibility with seed 48...");
    let mut a = OptionPricer::new(params, Some(48)).expect("Valid parameters");
    let mut b = OptionPricer::new(params, Some(48)).expect("Valid parameters");
    let ra = a.calculate_price(50_000).expect("Positive path count");
    let rb = b.calculate_price(50_000).expect("Positive path count");
    println!("   first:  {:?}", ra);
    println!("   second: {:?}", rb);
    println!("   identical: {}", ra == rb);

    // 3. Entropy seeding
    println!("\n3. Entropy-seeded pricer...");
    let mut unseeded = OptionPricer::new(params, None).expect("Valid parameters");
    let result = unseeded.calculate_price(50_000).expect("Positive path count");
    println!("   {:.4} ± {:.4}", result.price, result.std_error);

    // 4. Invalid inputs
    println!("\n4. Invalid parameters...");
    let bad = OptionParams { sigma: -0.2, ..params };
    match OptionPricer::new(bad, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricerError::InvalidParameter { parameter, value, constraint }) => {
            println!("   ✓ Caught InvalidParameter: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n5. Invalid path counts...");
    match pricer.calculate_price(0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
    match validate_sample_count(-10) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n✓ Demo complete!");
}
