//! Reporting of the per data set results.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anes::{Attribute, Color, ResetAttributes, SetAttribute, SetForegroundColor};

use crate::analysis::{Measured, Outcome, Statistics};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::format;
use crate::measurement;

/// Receives the events of a run. Every hook does nothing by default.
pub trait Report {
    /// A data set is about to be analysed.
    fn dataset_start(&self, _dataset: &Dataset) {}
    /// The statistics of a data set were computed.
    fn analysis_complete(&self, _dataset: &Dataset, _measured: &Measured) {}
    /// The statistics of a data set could not be computed.
    fn analysis_failed(&self, _dataset: &Dataset, _error: &Error) {}
    /// The figure of a data set was written to `path`.
    fn plot_saved(&self, _dataset: &Dataset, _path: &Path) {}
    /// The figure of a data set could not be written.
    fn plot_failed(&self, _dataset: &Dataset, _error: &Error) {}
    /// Every data set has been processed.
    fn final_summary(&self, _outcomes: &[Outcome]) {}
}

/// Fans the events out to the enabled reports
pub struct Reports {
    /// Console report
    pub cli: Option<CliReport>,
    /// JSON export
    pub json: Option<JsonReport>,
}
macro_rules! reports_impl {
    (fn $name:ident(&self, $($argn:ident: $argt:ty),*)) => {
        fn $name(&self, $($argn: $argt),* ) {
            if let Some(reporter) = &self.cli {
                reporter.$name($($argn),*);
            }
            if let Some(reporter) = &self.json {
                reporter.$name($($argn),*);
            }
        }
    };
}

impl Report for Reports {
    reports_impl!(fn dataset_start(&self, dataset: &Dataset));
    reports_impl!(fn analysis_complete(&self, dataset: &Dataset, measured: &Measured));
    reports_impl!(fn analysis_failed(&self, dataset: &Dataset, error: &Error));
    reports_impl!(fn plot_saved(&self, dataset: &Dataset, path: &Path));
    reports_impl!(fn plot_failed(&self, dataset: &Dataset, error: &Error));
    reports_impl!(fn final_summary(&self, outcomes: &[Outcome]));
}

/// Console verbosity
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CliVerbosity {
    /// The statistics and diagnostics
    Normal,
    /// Also the sample size and the fitted line
    Verbose,
}

/// Writes the results to the console
pub struct CliReport {
    /// Emit ANSI colour and attribute escapes
    pub enable_text_coloring: bool,
    /// How much to print
    pub verbosity: CliVerbosity,
}
impl CliReport {
    /// Creates a console report
    pub fn new(enable_text_coloring: bool, verbosity: CliVerbosity) -> CliReport {
        CliReport {
            enable_text_coloring,
            verbosity,
        }
    }

    fn with_color(&self, color: Color, s: &str) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetForegroundColor(color), s, ResetAttributes)
        } else {
            String::from(s)
        }
    }

    fn green(&self, s: &str) -> String {
        self.with_color(Color::DarkGreen, s)
    }

    fn red(&self, s: &str) -> String {
        self.with_color(Color::DarkRed, s)
    }

    fn bold(&self, s: String) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetAttribute(Attribute::Bold), s, ResetAttributes)
        } else {
            s
        }
    }

    fn faint(&self, s: String) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetAttribute(Attribute::Faint), s, ResetAttributes)
        } else {
            s
        }
    }

    /// The lines printed for a computed data set
    pub fn statistics_lines(&self, measured: &Measured) -> Vec<String> {
        let Statistics {
            n,
            slope,
            intercept,
            r_squared,
            residual_standard_error,
            f_statistic,
        } = measured.statistics;

        let mut lines = Vec::with_capacity(9);
        if self.verbosity == CliVerbosity::Verbose {
            lines.push(self.faint(format::field("Points", &n.to_string())));
            lines.push(self.faint(format::field(
                "Fitted line",
                &format!("y = {} * x + {}", format::stat(slope), format::stat(intercept)),
            )));
        }
        lines.push(format::field("Slope", &format::stat(slope)));
        lines.push(format::field("Intercept", &format::stat(intercept)));
        lines.push(format::field("R-squared", &format::stat(r_squared)));
        lines.push(format::field(
            "Residual Std. Error",
            &format::stat(residual_standard_error),
        ));
        lines.push(format::field("F-statistic", &format::stat(f_statistic)));
        lines.push(format::field(
            "Time (ms)",
            &format::stat(measurement::as_millis_f64(measured.elapsed)),
        ));
        lines.push(format::field(
            "Memory (bytes)",
            &measured.allocated_bytes.to_string(),
        ));
        lines
    }
}

impl Report for CliReport {
    fn dataset_start(&self, dataset: &Dataset) {
        println!();
        println!("{}", self.bold(format!("Analyzing Dataset {}", dataset.name)));
    }

    fn analysis_complete(&self, _: &Dataset, measured: &Measured) {
        for line in self.statistics_lines(measured) {
            println!("{}", line);
        }
    }

    fn analysis_failed(&self, dataset: &Dataset, error: &Error) {
        eprintln!(
            "  {} {}: {}",
            self.red("Analysis failed"),
            dataset.name,
            error
        );
    }

    fn plot_saved(&self, _: &Dataset, path: &Path) {
        println!("  Plot saved to {}", path.display());
    }

    fn plot_failed(&self, dataset: &Dataset, error: &Error) {
        eprintln!("  {} {}: {}", self.red("Plot failed"), dataset.name, error);
    }

    fn final_summary(&self, outcomes: &[Outcome]) {
        let analysed = outcomes.iter().filter(|o| o.analysis.is_ok()).count();
        let plotted = outcomes
            .iter()
            .filter(|o| matches!(o.plot, Some(Ok(_))))
            .count();
        let failed = outcomes.iter().filter(|o| !o.is_success()).count();

        println!();
        let summary = format!(
            "{} of {} data sets analysed, {} plots written",
            analysed,
            outcomes.len(),
            plotted
        );
        if failed == 0 {
            println!("{}", self.green(&summary));
        } else {
            println!("{}, {}", summary, self.red(&format!("{} failed", failed)));
        }
    }
}

/// One data set in the JSON export
#[derive(Debug, Serialize)]
pub struct Record<'a> {
    /// Name of the data set
    pub name: &'a str,
    /// The statistics, when they could be computed
    pub statistics: Option<Statistics>,
    /// Time spent computing the statistics, in milliseconds
    pub time_ms: Option<f64>,
    /// Bytes allocated while computing the statistics
    pub memory_bytes: Option<u64>,
    /// The figure, when one was written
    pub plot: Option<&'a Path>,
    /// What went wrong, if anything
    pub errors: Vec<String>,
}

impl<'a> Record<'a> {
    /// Flattens an outcome
    pub fn from_outcome(outcome: &'a Outcome) -> Record<'a> {
        let mut errors = Vec::new();
        let (statistics, time_ms, memory_bytes) = match &outcome.analysis {
            Ok(measured) => (
                Some(measured.statistics),
                Some(measurement::as_millis_f64(measured.elapsed)),
                Some(measured.allocated_bytes),
            ),
            Err(e) => {
                errors.push(e.to_string());
                (None, None, None)
            }
        };
        let plot = match &outcome.plot {
            Some(Ok(path)) => Some(path.as_path()),
            Some(Err(e)) => {
                errors.push(e.to_string());
                None
            }
            None => None,
        };

        Record {
            name: &outcome.name,
            statistics,
            time_ms,
            memory_bytes,
            plot,
            errors,
        }
    }
}

/// Writes every outcome to a JSON file once the run is over.
///
/// Non-finite numbers (the F-statistic of a perfect fit) are written as `null`.
pub struct JsonReport {
    /// Destination of the export
    pub path: PathBuf,
}
impl JsonReport {
    /// Creates an export to `path`
    pub fn new(path: PathBuf) -> JsonReport {
        JsonReport { path }
    }

    fn save(&self, outcomes: &[Outcome]) -> Result<()> {
        let records: Vec<Record<'_>> = outcomes.iter().map(Record::from_outcome).collect();

        let file = File::create(&self.path).map_err(|inner| Error::AccessError {
            inner,
            path: self.path.clone(),
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), &records).map_err(|inner| {
            Error::SerdeError {
                inner,
                path: self.path.clone(),
            }
        })?;

        info!("Wrote {} records to {:?}", records.len(), self.path);
        Ok(())
    }
}

impl Report for JsonReport {
    fn final_summary(&self, outcomes: &[Outcome]) {
        log_if_err!(self.save(outcomes));
    }
}
