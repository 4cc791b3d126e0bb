//! Command-line configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches, ErrorKind};

use crate::dataset::{self, Dataset};
use crate::error::{Error, Result};
use crate::plot::PlotFormat;
use crate::report::CliVerbosity;

/// When to colour the console output
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorChoice {
    /// Only when stdout is a terminal
    Auto,
    /// Always
    Always,
    /// Never
    Never,
}

/// Settings of a run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file with the data sets; the Anscombe Quartet when `None`
    pub input: Option<PathBuf>,
    /// Directory receiving the figures
    pub output_directory: PathBuf,
    /// Image format of the figures
    pub format: PlotFormat,
    /// Draw the figures
    pub plot_enabled: bool,
    /// File receiving the JSON export
    pub export: Option<PathBuf>,
    /// Console colouring
    pub color: ColorChoice,
    /// Print the sample size and the fitted line as well
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input: None,
            output_directory: PathBuf::from("."),
            format: PlotFormat::default(),
            plot_enabled: true,
            export: None,
            color: ColorChoice::Auto,
            verbose: false,
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("anscombe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Least-squares statistics and scatter plots of paired data sets")
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .takes_value(true)
            .value_name("FILE")
            .help("JSON file holding an array of {\"name\", \"x\", \"y\"} objects. Defaults to the Anscombe Quartet."))
        .arg(Arg::with_name("output-directory")
            .short("o")
            .long("output-directory")
            .takes_value(true)
            .value_name("DIR")
            .default_value(".")
            .help("Directory receiving the figures. Created if missing."))
        .arg(Arg::with_name("format")
            .short("f")
            .long("format")
            .takes_value(true)
            .possible_values(&["svg", "png"])
            .default_value("svg")
            .help("Image format of the figures."))
        .arg(Arg::with_name("noplot")
            .short("n")
            .long("noplot")
            .help("Disable plot generation."))
        .arg(Arg::with_name("export")
            .long("export")
            .takes_value(true)
            .value_name("FILE")
            .help("Write the results of every data set to FILE as JSON."))
        .arg(Arg::with_name("color")
            .short("c")
            .long("color")
            .alias("colour")
            .takes_value(true)
            .possible_values(&["auto", "always", "never"])
            .default_value("auto")
            .help("Configure coloring of output. always = always colorize output, never = never colorize output, auto = colorize output if output is a tty."))
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Print the sample size and the fitted line of each data set."))
}

impl Config {
    /// Parses the process arguments, exiting with usage on error or on `--help`.
    pub fn from_args() -> Config {
        match Config::from_args_safe(std::env::args_os()) {
            Ok(config) => config,
            Err(e) => e.exit(),
        }
    }

    /// Parses `args`; the first item is the program name.
    pub fn from_args_safe<I, T>(args: I) -> std::result::Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Config::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches<'_>) -> std::result::Result<Config, clap::Error> {
        let format: PlotFormat = matches
            .value_of("format")
            .unwrap_or("svg")
            .parse()
            .map_err(|e: Error| {
                clap::Error::with_description(&e.to_string(), ErrorKind::InvalidValue)
            })?;
        if !format.is_supported() {
            return Err(clap::Error::with_description(
                &format!(
                    "{} figures need the `{}` feature of anscombe",
                    format, format
                ),
                ErrorKind::InvalidValue,
            ));
        }

        let color = match matches.value_of("color") {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        Ok(Config {
            input: matches.value_of_os("input").map(PathBuf::from),
            output_directory: matches
                .value_of_os("output-directory")
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
            format,
            plot_enabled: !matches.is_present("noplot"),
            export: matches.value_of_os("export").map(PathBuf::from),
            color,
            verbose: matches.is_present("verbose"),
        })
    }

    /// The data sets named by `input`, or the Anscombe Quartet
    pub fn datasets(&self) -> Result<Vec<Dataset>> {
        match &self.input {
            Some(path) => dataset::load(path),
            None => Ok(Dataset::anscombe_quartet()),
        }
    }

    /// Resolves the colour choice against the terminal
    pub fn enable_text_coloring(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => atty::is(atty::Stream::Stdout),
        }
    }

    /// Console verbosity
    pub fn verbosity(&self) -> CliVerbosity {
        if self.verbose {
            CliVerbosity::Verbose
        } else {
            CliVerbosity::Normal
        }
    }
}
