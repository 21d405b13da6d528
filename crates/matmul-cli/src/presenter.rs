//! CLI result presenter.

use std::fmt::Write as _;

use matmul_orchestration::{MultiplicationResult, ResultPresenter, SizeReport};

use crate::output::{checksum, format_duration, gflops};
use crate::ui::{header, is_color_disabled, status_line, Status};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    plain: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            plain: is_color_disabled(),
        }
    }

    /// Disable styling regardless of `NO_COLOR`.
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.plain = true;
        self
    }

    /// Render the block printed for one size.
    #[must_use]
    pub fn render_size(&self, report: &SizeReport) -> String {
        let mut out = String::new();

        if self.quiet {
            match report.fastest() {
                Some(best) => {
                    let _ = writeln!(
                        out,
                        "{} {} {}",
                        report.size,
                        best.strategy,
                        format_duration(best.duration())
                    );
                }
                None => {
                    let _ = writeln!(out, "{} - -", report.size);
                }
            }
            return out;
        }

        let _ = writeln!(
            out,
            "{}",
            header(&format!("{0}x{0}", report.size), self.plain)
        );
        for result in &report.results {
            let _ = writeln!(out, "{}", self.render_row(report.size, result));
        }

        let verdict = match (&report.mismatch, report.fastest()) {
            (Some(err), _) => status_line(Status::Warn, &err.to_string(), self.plain),
            (None, Some(best)) => status_line(
                Status::Ok,
                &format!("all strategies agree (fastest: {})", best.strategy),
                self.plain,
            ),
            (None, None) => status_line(Status::Ok, "nothing to compare", self.plain),
        };
        let _ = writeln!(out, "{verdict}");
        out
    }

    fn render_row(&self, size: usize, result: &MultiplicationResult) -> String {
        let mut row = format!(
            "  {:<18} {:>10}",
            result.strategy,
            format_duration(result.duration())
        );

        match &result.outcome {
            Ok(_) => {
                if let Some(g) = gflops(size, result.duration()) {
                    let _ = write!(row, " {g:>8.2} GFLOP/s");
                }
                if self.verbose {
                    let t = &result.timing;
                    let _ = write!(
                        row,
                        "  min {} max {} n={}",
                        format_duration(t.min),
                        format_duration(t.max),
                        t.iterations
                    );
                    if let Some(sum) = checksum(result) {
                        let _ = write!(row, " sum={sum:.6e}");
                    }
                }
                row.push_str("  [OK]");
            }
            Err(e) => {
                let _ = write!(row, "  [ERROR] {e}");
            }
        }
        row
    }

    /// Render the closing summary, one line per size.
    #[must_use]
    pub fn render_summary(&self, reports: &[SizeReport]) -> String {
        if self.quiet || reports.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        let _ = writeln!(out, "\n{}", header("Summary", self.plain));
        let _ = writeln!(out, "  {:>6}  {:<18} {:>10}  status", "size", "fastest", "time");
        for report in reports {
            let (name, time) = report.fastest().map_or_else(
                || ("-".to_string(), "-".to_string()),
                |best| (best.strategy.clone(), format_duration(best.duration())),
            );
            let status = if report.is_consistent() { "ok" } else { "MISMATCH" };
            let _ = writeln!(out, "  {:>6}  {name:<18} {time:>10}  {status}", report.size);
        }
        out
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_size(&self, report: &SizeReport) {
        print!("{}", self.render_size(report));
    }

    fn present_summary(&self, reports: &[SizeReport]) {
        print!("{}", self.render_summary(reports));
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", status_line(Status::Error, error, self.plain));
    }
}
