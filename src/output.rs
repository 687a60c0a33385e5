// src/output.rs
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// One timed pricing run, as recorded by the benchmark
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub label: String,
    pub paths: usize,
    pub time_s: f64,
    pub price: f64,
    pub std_error: f64,
    pub analytic: f64,
}

impl RunRecord {
    pub fn throughput(&self) -> f64 {
        if self.time_s > 0.0 {
            self.paths as f64 / self.time_s
        } else {
            f64::INFINITY
        }
    }

    pub fn percent_difference(&self) -> f64 {
        crate::math_utils::percent_difference(self.price, self.analytic)
    }
}

/// Append records as whitespace-separated lines:
/// `paths time_s price std_error analytic pct_diff`
pub fn append_records_to_dat<P: AsRef<Path>>(filename: P, records: &[RunRecord]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(filename)?;
    for record in records {
        writeln!(
            file,
            "{} {} {} {} {} {:.4}",
            record.paths,
            record.time_s,
            record.price,
            record.std_error,
            record.analytic,
            record.percent_difference()
        )?;
    }
    Ok(())
}

/// Write records as CSV, preceded by `# key: value` comment lines
pub fn write_records_to_csv<P: AsRef<Path>>(
    filename: P,
    header_comments: &[(&str, String)],
    records: &[RunRecord],
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in header_comments {
        writeln!(file, "# {}: {}", key, value)?;
    }
    writeln!(
        file,
        "run,paths,time_s,paths_per_sec,price,std_error,analytic,pct_diff"
    )?;
    for record in records {
        writeln!(
            file,
            "{},{},{:.6},{:.0},{:.6},{:.6},{:.6},{:.4}",
            record.label,
            record.paths,
            record.time_s,
            record.throughput(),
            record.price,
            record.std_error,
            record.analytic,
            record.percent_difference()
        )?;
    }
    Ok(())
}
