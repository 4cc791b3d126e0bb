//! Figures: a scatter plot of each data set with its least-squares line.

mod plotters_backend;

pub use self::plotters_backend::PlottersBackend;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::stats::bivariate::regression::StraightLine;
use crate::stats::bivariate::Data;

/// Image format of the figures
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlotFormat {
    /// Scalable vector graphics
    Svg,
    /// Portable network graphics, needs the `png` feature
    Png,
}

impl Default for PlotFormat {
    fn default() -> Self {
        PlotFormat::Svg
    }
}

impl PlotFormat {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            PlotFormat::Svg => "svg",
            PlotFormat::Png => "png",
        }
    }

    /// Returns `true` if this build can render the format
    pub fn is_supported(self) -> bool {
        match self {
            PlotFormat::Svg => true,
            PlotFormat::Png => cfg!(feature = "png"),
        }
    }
}

impl FromStr for PlotFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "svg" => Ok(PlotFormat::Svg),
            "png" => Ok(PlotFormat::Png),
            other => Err(Error::UnsupportedFormat(other.to_owned())),
        }
    }
}

impl fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where and how a figure is drawn
#[derive(Clone, Copy)]
pub struct PlotContext<'a> {
    /// The data set being drawn
    pub dataset: &'a Dataset,
    /// Directory receiving the figure
    pub output_directory: &'a Path,
    /// Image format
    pub format: PlotFormat,
    /// Canvas size in pixels; the backend default when `None`
    pub size: Option<(u32, u32)>,
}

impl<'a> PlotContext<'a> {
    /// `<output_directory>/anscombe_<name>.<ext>`
    pub fn figure_path(&self) -> PathBuf {
        let mut path = self.output_directory.to_path_buf();
        // Not `set_extension`: data set names may contain dots
        path.push(format!(
            "{}.{}",
            self.dataset.file_stem(),
            self.format.extension()
        ));
        path
    }
}

/// What a figure shows
#[derive(Clone, Copy)]
pub struct PlotData<'a> {
    /// The points
    pub data: Data<'a, f64, f64>,
    /// The fitted line
    pub line: StraightLine<f64>,
}

/// A figure renderer
pub trait Plotter {
    /// Draws the scatter plot of `data` with its regression line and returns the path written.
    fn regression(&mut self, ctx: PlotContext<'_>, data: PlotData<'_>) -> Result<PathBuf>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!("svg".parse::<PlotFormat>().unwrap(), PlotFormat::Svg);
        assert_eq!("png".parse::<PlotFormat>().unwrap(), PlotFormat::Png);
        assert!(matches!(
            "gif".parse::<PlotFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(PlotFormat::Svg.is_supported());
    }

    #[test]
    fn figure_path_uses_the_file_stem() {
        let dataset = Dataset::new("III", vec![], vec![]);
        let ctx = PlotContext {
            dataset: &dataset,
            output_directory: Path::new("out"),
            format: PlotFormat::Png,
            size: None,
        };

        assert_eq!(ctx.figure_path(), Path::new("out").join("anscombe_III.png"));
    }
}
