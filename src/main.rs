use std::process;

use anscombe::alloc::CountingAllocator;
use anscombe::plot::PlottersBackend;
use anscombe::report::{CliReport, JsonReport, Reports};
use anscombe::Config;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn main() {
    let config = Config::from_args();

    let datasets = match config.datasets() {
        Ok(datasets) => datasets,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let reports = Reports {
        cli: Some(CliReport::new(
            config.enable_text_coloring(),
            config.verbosity(),
        )),
        json: config.export.clone().map(JsonReport::new),
    };
    let mut plotter = PlottersBackend;

    let outcomes = anscombe::run(&config, &datasets, &reports, &mut plotter);

    if !outcomes.iter().all(|outcome| outcome.is_success()) {
        process::exit(1);
    }
}
