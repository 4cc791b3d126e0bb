//! Ordinary least-squares statistics for small paired data sets.
//!
//! The crate computes the slope and intercept of the least-squares line, the coefficient of
//! determination, the residual standard error and the F-statistic for each data set it is given
//! (by default the four data sets of the Anscombe Quartet), reports them together with timing and
//! allocation figures, and renders a scatter plot with the fitted line for each data set.
//!
//! ```
//! use anscombe::stats::bivariate::Data;
//! use anscombe::stats::bivariate::regression::{f_statistic, StraightLine};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [3.0, 5.0, 7.0, 9.0, 11.0];
//! let data = Data::new(&x, &y).unwrap();
//!
//! let line = StraightLine::fit(&data).unwrap();
//! assert_eq!((line.slope, line.intercept), (2.0, 1.0));
//! assert_eq!(line.r_squared(&data).unwrap(), 1.0);
//! assert_eq!(f_statistic(1.0, data.len()).unwrap(), f64::INFINITY);
//! ```

#![warn(missing_docs)]
#![warn(bare_trait_objects)]
#![allow(clippy::just_underscores_and_digits)] // Used in the stats code

#[cfg(test)]
extern crate approx;

#[cfg(test)]
extern crate quickcheck;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros_private;

pub mod alloc;
pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
mod format;
pub mod measurement;
pub mod plot;
pub mod report;
pub mod stats;

pub use crate::analysis::{analyze, run, Outcome, Statistics};
pub use crate::config::Config;
pub use crate::dataset::Dataset;
pub use crate::error::{Error, Result};

lazy_static! {
    static ref DEBUG_ENABLED: bool = std::env::var_os("ANSCOMBE_DEBUG").is_some();
}

fn debug_enabled() -> bool {
    *DEBUG_ENABLED
}
