//! CLI output formatting and JSON report export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use matmul_core::Options;
use matmul_orchestration::{MultiplicationResult, SizeReport};

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    match secs {
        s if s < 1e-3 => format!("{:.2}µs", s * 1e6),
        s if s < 1.0 => format!("{:.2}ms", s * 1e3),
        s if s < 60.0 => format!("{s:.3}s"),
        s => {
            let mins = (s / 60.0).floor() as u64;
            format!("{mins}m{:.1}s", s - mins as f64 * 60.0)
        }
    }
}

/// Throughput of an `n x n` by `n x n` product, counting `2n^3` flops.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gflops(size: usize, d: Duration) -> Option<f64> {
    let secs = d.as_secs_f64();
    if size == 0 || secs <= 0.0 {
        return None;
    }
    let n = size as f64;
    Some(2.0 * n * n * n / secs / 1e9)
}

/// Sum of every entry of a product, for quick eyeballing across strategies.
#[must_use]
pub fn checksum(result: &MultiplicationResult) -> Option<f64> {
    result
        .outcome
        .as_ref()
        .ok()
        .map(|m| m.as_slice().iter().sum())
}

/// Serializable benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub seed: u64,
    pub options: Options,
    pub sizes: Vec<JsonSize>,
}

/// One benchmark size in a [`JsonReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSize {
    pub size: usize,
    pub consistent: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mismatch: Option<String>,
    pub results: Vec<JsonTiming>,
}

/// One strategy's timing in a [`JsonSize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonTiming {
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub iterations: u32,
    pub median_secs: f64,
    pub mean_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub checksum: Option<f64>,
}

impl JsonReport {
    /// Build the serializable form of a benchmark run.
    #[must_use]
    pub fn from_reports(reports: &[SizeReport], seed: u64, options: Options) -> Self {
        let sizes = reports
            .iter()
            .map(|report| JsonSize {
                size: report.size,
                consistent: report.is_consistent(),
                mismatch: report.mismatch.as_ref().map(ToString::to_string),
                results: report.results.iter().map(JsonTiming::from_result).collect(),
            })
            .collect();
        Self {
            seed,
            options,
            sizes,
        }
    }
}

impl JsonTiming {
    fn from_result(result: &MultiplicationResult) -> Self {
        let t = &result.timing;
        Self {
            strategy: result.strategy.clone(),
            error: result.outcome.as_ref().err().map(ToString::to_string),
            iterations: t.iterations,
            median_secs: t.median.as_secs_f64(),
            mean_secs: t.mean.as_secs_f64(),
            min_secs: t.min.as_secs_f64(),
            max_secs: t.max.as_secs_f64(),
            checksum: checksum(result),
        }
    }
}

/// Write a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &Path, report: &JsonReport) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, report).map_err(io::Error::other)?;
    writeln!(out)?;
    out.flush()?;
    debug!(path = %path.display(), sizes = report.sizes.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matmul_core::{Matrix, MatrixError, Shape};
    use matmul_orchestration::runner::BenchmarkResult;
    use matmul_orchestration::BenchError;

    fn sample() -> Vec<SizeReport> {
        let timing = BenchmarkResult {
            mean: Duration::from_millis(4),
            median: Duration::from_millis(3),
            min: Duration::from_millis(2),
            max: Duration::from_millis(8),
            iterations: 3,
        };
        vec![SizeReport {
            size: 2,
            results: vec![
                MultiplicationResult {
                    strategy: "Naive".into(),
                    outcome: Ok(Matrix::filled(2, 2, 1.5)),
                    timing,
                },
                MultiplicationResult {
                    strategy: "Strassen".into(),
                    outcome: Err(MatrixError::DimensionMismatch {
                        left: Shape::new(2, 3),
                        right: Shape::new(2, 3),
                    }),
                    timing,
                },
            ],
            mismatch: Some(BenchError::NoValidResults),
        }]
    }

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "0.50µs");
        assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
        assert_eq!(format_duration(Duration::from_millis(3140)), "3.140s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn gflops_counts_two_n_cubed() {
        let g = gflops(1000, Duration::from_secs(2)).unwrap();
        assert!((g - 1.0).abs() < 1e-12);
        assert_eq!(gflops(0, Duration::from_secs(1)), None);
        assert_eq!(gflops(10, Duration::ZERO), None);
    }

    #[test]
    fn report_fields() {
        let report = JsonReport::from_reports(&sample(), 7, Options::default());
        assert_eq!(report.seed, 7);
        let size = &report.sizes[0];
        assert!(!size.consistent);
        assert_eq!(size.mismatch.as_deref(), Some("no valid results"));
        assert_eq!(size.results[0].checksum, Some(6.0));
        assert!(size.results[0].error.is_none());
        assert!(size.results[1]
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("dimension mismatch")));
        assert!((size.results[0].median_secs - 0.003).abs() < 1e-12);
    }

    #[test]
    fn write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = JsonReport::from_reports(&sample(), 1, Options::default());
        write_report(&path, &report).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: JsonReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.seed, report.seed);
        assert_eq!(parsed.options.strassen_threshold, report.options.strassen_threshold);
        assert_eq!(parsed.sizes.len(), 1);
        assert_eq!(parsed.sizes[0].results[1].error, report.sizes[0].results[1].error);
        assert_eq!(parsed.sizes[0].results[0].checksum, Some(6.0));
        assert!(!text.contains("\"checksum\": null"));
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.json");
        let report = JsonReport::from_reports(&[], 1, Options::default());
        assert!(write_report(&path, &report).is_err());
    }
}
