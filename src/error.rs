//! Error type shared by the statistics engine and its collaborators.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// One of the two coordinates of a bivariate data set
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    /// The independent variable
    X,
    /// The dependent variable
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// Everything that can go wrong while analysing or rendering a data set
#[derive(Debug)]
pub enum Error {
    /// The `x` and `y` sequences have different lengths
    ShapeMismatch {
        /// Length of the `x` sequence
        x_len: usize,
        /// Length of the `y` sequence
        y_len: usize,
    },
    /// A value is `NaN` or infinite
    NonFiniteInput {
        /// Sequence holding the value
        axis: Axis,
        /// Position of the value
        index: usize,
    },
    /// All the values of one axis are identical, so its variance is zero
    DegenerateInput(Axis),
    /// Not enough data points for the requested statistic
    InsufficientSampleSize {
        /// Minimum number of points the statistic needs
        required: usize,
        /// Number of points that were given
        actual: usize,
    },
    /// Finite inputs whose sums leave the floating-point range
    Overflow {
        /// Statistic that was being computed
        statistic: &'static str,
    },
    /// The plotting backend failed to draw or write a figure
    Render {
        /// Figure that was being rendered
        path: PathBuf,
        /// Message reported by the backend
        message: String,
    },
    /// The requested figure format is not compiled in or not known
    UnsupportedFormat(String),
    /// A file or directory could not be accessed
    AccessError {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO error
        inner: io::Error,
    },
    /// A JSON document could not be read or written
    SerdeError {
        /// Path of the document
        path: PathBuf,
        /// Underlying serialization error
        inner: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch { x_len, y_len } => write!(
                f,
                "x and y must have the same length (got {} and {})",
                x_len, y_len
            ),
            Error::NonFiniteInput { axis, index } => {
                write!(f, "{}[{}] is not a finite number", axis, index)
            }
            Error::DegenerateInput(axis) => write!(
                f,
                "all {} values are identical; the {} variance is zero",
                axis, axis
            ),
            Error::InsufficientSampleSize { required, actual } => write!(
                f,
                "need at least {} data points, got {}",
                required, actual
            ),
            Error::Overflow { statistic } => write!(
                f,
                "the {} is out of floating-point range for these values",
                statistic
            ),
            Error::Render { path, message } => {
                write!(f, "Failed to render figure {:?}: {}", path, message)
            }
            Error::UnsupportedFormat(format) => {
                write!(f, "Unsupported figure format: {}", format)
            }
            Error::AccessError { path, inner } => {
                write!(f, "Failed to access file {:?}: {}", path, inner)
            }
            Error::SerdeError { path, inner } => write!(
                f,
                "Failed to read or write file {:?} due to serialization error: {}",
                path, inner
            ),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::AccessError { inner, .. } => Some(inner),
            Error::SerdeError { inner, .. } => Some(inner),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = ::std::result::Result<T, Error>;

pub(crate) fn log_error(e: &Error) {
    error!("error: {}", e);
}
