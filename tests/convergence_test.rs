// tests/convergence_test.rs
use euro_mc::analytics::bs_analytic;
use euro_mc::{OptionParams, OptionPricer};

fn price_with_paths(params: OptionParams, paths: usize) -> (f64, f64) {
    let mut pricer = OptionPricer::new(params, Some(42)).expect("Valid parameters");
    pricer.calculate_price(paths).expect("Positive path count").into()
}

#[test]
fn test_std_error_shrinks_with_sqrt_n() {
    let params = OptionParams::default();
    let path_counts = [100usize, 10_000, 1_000_000];

    let errors: Vec<f64> = path_counts
        .iter()
        .map(|&n| price_with_paths(params, n).1)
        .collect();

    // 100x more paths should cut the standard error by roughly 10x
    for i in 0..(errors.len() - 1) {
        let ratio = errors[i] / errors[i + 1];
        println!(
            "SE({}) / SE({}) = {:.3}",
            path_counts[i],
            path_counts[i + 1],
            ratio
        );
        assert!(
            ratio > 5.0 && ratio < 20.0,
            "Standard error ratio {} not close to 10 at step {}",
            ratio,
            i
        );
    }
}

#[test]
fn test_price_converges_to_black_scholes() {
    let cases = [
        OptionParams::default(),
        OptionParams { s0: 110.0, k: 100.0, r: 0.02, sigma: 0.3, t: 0.5 },
        OptionParams { s0: 90.0, k: 100.0, r: 0.04, sigma: 0.25, t: 2.0 },
    ];

    for params in cases {
        let analytic = bs_analytic::bs_call_price(params.s0, params.k, params.r, params.sigma, params.t);

        let mut prev_abs_error_bound = f64::INFINITY;
        for &paths in &[10_000usize, 1_000_000] {
            let (price, std_error) = price_with_paths(params, paths);
            let abs_error = (price - analytic).abs();

            println!(
                "{:?} paths={} mc={:.5} analytic={:.5} se={:.5}",
                params, paths, price, analytic, std_error
            );

            assert!(
                abs_error < 5.0 * std_error,
                "MC price {} more than 5 SE from analytic {} (se = {})",
                price,
                analytic,
                std_error
            );
            assert!(5.0 * std_error < prev_abs_error_bound);
            prev_abs_error_bound = 5.0 * std_error;
        }
    }
}
