use euro_mc::analytics::bs_analytic;
use euro_mc::math_utils::Timer;
use euro_mc::output::{self, RunRecord};
use euro_mc::{OptionParams, OptionPricer, PricerResult};
use std::env;
use std::error::Error;
use std::process::Command;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED: u64 = 48;
const DEFAULT_RUNS: usize = 25;
const RUN_PATHS: usize = 1_000_000;

const QUICK_PATH_COUNTS: [usize; 5] = [10_000, 100_000, 500_000, 1_000_000, 5_000_000];
const FULL_PATH_COUNTS: [usize; 10] = [
    500_000, 750_000, 1_000_000, 5_000_000, 10_000_000, 15_000_000, 20_000_000, 30_000_000,
    40_000_000, 50_000_000,
];

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }

    fn header_comments(&self, seed: u64, params: &OptionParams) -> Vec<(&'static str, String)> {
        vec![
            ("OS", self.os.clone()),
            ("CPU", self.cpu_model.clone()),
            ("CPU Cores", self.cpu_cores.to_string()),
            ("Rust Version", self.rust_version.clone()),
            ("RUSTFLAGS", self.rustc_flags.clone()),
            ("Seed", seed.to_string()),
            ("Sampler", "StdRng + rand_distr::StandardNormal".to_string()),
            ("Params", format!("{:?}", params)),
            (
                "Benchmark Date",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
        ]
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(name, raw = raw.as_str(), "ignoring unparsable override");
            default
        }),
        Err(_) => default,
    }
}

fn timed_run(
    pricer: &mut OptionPricer,
    label: String,
    paths: usize,
    analytic: f64,
) -> PricerResult<RunRecord> {
    let mut timer = Timer::new();
    timer.start();
    let result = pricer.calculate_price(paths)?;
    let time_s = timer.elapsed_secs();

    let record = RunRecord {
        label,
        paths,
        time_s,
        price: result.price,
        std_error: result.std_error,
        analytic,
    };
    info!(
        paths,
        time_s,
        price = record.price,
        std_error = record.std_error,
        pct_diff = record.percent_difference(),
        "{}",
        record.label
    );
    Ok(record)
}

/// Price the same contract with increasing path counts on one seeded pricer
fn run_path_count_sweep(
    params: OptionParams,
    seed: u64,
    path_counts: &[usize],
    analytic: f64,
) -> PricerResult<Vec<RunRecord>> {
    let mut pricer = OptionPricer::new(params, Some(seed))?;
    path_counts
        .iter()
        .map(|&paths| timed_run(&mut pricer, format!("paths_{}", paths), paths, analytic))
        .collect()
}

/// Repeated runs at a fixed path count; the stream advances between runs
fn run_repeated_sweep(
    params: OptionParams,
    seed: u64,
    runs: usize,
    analytic: f64,
) -> PricerResult<Vec<RunRecord>> {
    let mut pricer = OptionPricer::new(params, Some(seed))?;
    (1..=runs)
        .map(|i| timed_run(&mut pricer, format!("iter_{}", i), RUN_PATHS, analytic))
        .collect()
}

fn print_table(title: &str, records: &[RunRecord]) {
    println!("\n{:=<96}", "");
    println!("{}", title);
    println!("{:=<96}", "");
    println!(
        "{:<18} {:>10} {:>10} {:>14} {:>10} {:>10} {:>10} {:>8}",
        "Run", "Paths", "Time (s)", "Paths/sec", "Price", "Std Err", "Analytic", "% Diff"
    );
    println!("{:-<96}", "");
    for record in records {
        println!(
            "{:<18} {:>10} {:>10.3} {:>14.0} {:>10.4} {:>10.5} {:>10.4} {:>8.3}",
            record.label,
            record.paths,
            record.time_s,
            record.throughput(),
            record.price,
            record.std_error,
            record.analytic,
            record.percent_difference()
        );
    }
    println!("{:=<96}", "");
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("euro-mc Benchmark Suite");
    println!("=======================\n");

    let seed = env_or("EURO_MC_SEED", DEFAULT_SEED);
    let runs = env_or("EURO_MC_RUNS", DEFAULT_RUNS);
    let full = env_or("EURO_MC_FULL", false);

    let params = OptionParams::default();
    let analytic = bs_analytic::bs_call_price(params.s0, params.k, params.r, params.sigma, params.t);

    let system_info = SystemInfo::gather();
    info!(?system_info, seed, runs, full, "starting benchmark");

    let path_counts: &[usize] = if full { &FULL_PATH_COUNTS } else { &QUICK_PATH_COUNTS };
    let sweep = run_path_count_sweep(params, seed, path_counts, analytic)?;
    print_table("PATH COUNT SWEEP", &sweep);

    let repeated = run_repeated_sweep(params, seed, runs, analytic)?;
    print_table("REPEATED RUNS", &repeated);

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let header = system_info.header_comments(seed, &params);

    let mut all_records = sweep.clone();
    all_records.extend(repeated.iter().cloned());
    let csv_name = format!("benchmark_results_{}.csv", timestamp);
    output::write_records_to_csv(&csv_name, &header, &all_records)?;

    output::append_records_to_dat("benchmark_results_num_sims.dat", &sweep)?;
    output::append_records_to_dat("benchmark_results_per_iter.dat", &repeated)?;

    println!("\nBenchmark complete!");
    println!("Results saved to: {}", csv_name);
    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: EURO_MC_SEED={} cargo run --bin benchmark --release", seed);

    Ok(())
}
