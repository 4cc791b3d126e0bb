//! Per data set pipeline: statistics, measurements, reporting and plotting.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::measurement;
use crate::plot::{PlotContext, PlotData, Plotter};
use crate::report::Report;
use crate::stats::bivariate::regression::{f_statistic, StraightLine};
use crate::stats::bivariate::Data;

/// The regression statistics of one data set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of data points
    pub n: usize,
    /// Slope of the least-squares line
    pub slope: f64,
    /// Intercept of the least-squares line
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Residual standard error
    pub residual_standard_error: f64,
    /// F-statistic, `+∞` for a perfect fit
    pub f_statistic: f64,
}

impl Statistics {
    /// The fitted line
    pub fn line(&self) -> StraightLine<f64> {
        StraightLine {
            slope: self.slope,
            intercept: self.intercept,
        }
    }
}

/// Fits the data and derives R², the residual standard error and the F-statistic, in that order.
/// The first failure is returned.
pub fn analyze(data: &Data<'_, f64, f64>) -> Result<Statistics> {
    let line = StraightLine::fit(data)?;
    let r_squared = line.r_squared(data)?;
    let residual_standard_error = line.residual_standard_error(data)?;
    let f_statistic = f_statistic(r_squared, data.len())?;

    Ok(Statistics {
        n: data.len(),
        slope: line.slope,
        intercept: line.intercept,
        r_squared,
        residual_standard_error,
        f_statistic,
    })
}

/// Statistics together with the cost of computing them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    /// The statistics
    pub statistics: Statistics,
    /// Wall-clock time spent in [`analyze`]
    pub elapsed: Duration,
    /// Bytes allocated by [`analyze`]
    pub allocated_bytes: u64,
}

/// Validates the data set, then runs [`analyze`] inside the time and allocation windows.
pub fn measure(dataset: &Dataset) -> Result<Measured> {
    let data = dataset.data()?;

    let (statistics, elapsed, allocated_bytes) = measurement::measure(|| analyze(&data));

    Ok(Measured {
        statistics: statistics?,
        elapsed,
        allocated_bytes,
    })
}

/// What happened to one data set
#[derive(Debug)]
pub struct Outcome {
    /// Name of the data set
    pub name: String,
    /// The statistics, or why they could not be computed
    pub analysis: Result<Measured>,
    /// The figure, when one was attempted
    pub plot: Option<Result<PathBuf>>,
}

impl Outcome {
    /// `true` if the statistics were computed and the figure, if attempted, was written
    pub fn is_success(&self) -> bool {
        self.analysis.is_ok() && !matches!(self.plot, Some(Err(_)))
    }
}

/// Analyses, reports and plots every data set in order.
///
/// A data set that fails (bad input, degenerate data, a figure that cannot be written) is reported
/// and recorded in its [`Outcome`]; the remaining data sets are processed regardless.
pub fn run(
    config: &Config,
    datasets: &[Dataset],
    report: &dyn Report,
    plotter: &mut dyn Plotter,
) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = datasets
        .iter()
        .map(|dataset| run_one(config, dataset, report, plotter))
        .collect();

    report.final_summary(&outcomes);

    outcomes
}

fn run_one(
    config: &Config,
    dataset: &Dataset,
    report: &dyn Report,
    plotter: &mut dyn Plotter,
) -> Outcome {
    report.dataset_start(dataset);

    let analysis = measure(dataset);
    let measured = match &analysis {
        Ok(measured) => {
            report.analysis_complete(dataset, measured);
            *measured
        }
        Err(e) => {
            info!("Analysis of data set {} failed: {:?}", dataset.name, e);
            report.analysis_failed(dataset, e);
            return Outcome {
                name: dataset.name.clone(),
                analysis,
                plot: None,
            };
        }
    };

    let plot = if config.plot_enabled {
        let result = plot(config, dataset, &measured, plotter);
        match &result {
            Ok(path) => report.plot_saved(dataset, path),
            Err(e) => report.plot_failed(dataset, e),
        }
        Some(result)
    } else {
        None
    };

    Outcome {
        name: dataset.name.clone(),
        analysis,
        plot,
    }
}

fn plot(
    config: &Config,
    dataset: &Dataset,
    measured: &Measured,
    plotter: &mut dyn Plotter,
) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.output_directory).map_err(|inner| Error::AccessError {
        inner,
        path: config.output_directory.clone(),
    })?;

    let ctx = PlotContext {
        dataset,
        output_directory: &config.output_directory,
        format: config.format,
        size: None,
    };
    let data = PlotData {
        data: dataset.data()?,
        line: measured.statistics.line(),
    };

    plotter.regression(ctx, data)
}
