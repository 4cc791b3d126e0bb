use super::*;

use std::ops::Range;

use itertools::{Itertools, MinMaxResult};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};

use crate::plot::PlotData;

/// Scatter plot of the data with the regression line drawn over `[min(x), max(x)]`
pub(crate) fn regression_figure<DB: DrawingBackend>(
    root_area: DrawingArea<DB, Shift>,
    title: &str,
    data: &PlotData<'_>,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let xs = data.data.x();
    let ys = data.data.y();
    let line = data.line;

    let (x_min, x_max) = bounds(xs.iter().cloned());
    let line_points = vec![(x_min, line.predict(x_min)), (x_max, line.predict(x_max))];

    let x_range = padded(x_min, x_max);
    let (y_min, y_max) = bounds(
        ys.iter()
            .cloned()
            .chain(line_points.iter().map(|&(_, y)| y)),
    );
    let y_range = padded(y_min, y_max);

    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, (DEFAULT_FONT, 20))
        .margin((5).percent())
        .set_label_area_size(LabelAreaPosition::Left, (10).percent_width().min(60))
        .set_label_area_size(LabelAreaPosition::Bottom, (10).percent_height().min(40))
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("X")
        .y_desc("Y")
        .light_line_style(TRANSPARENT)
        .draw()?;

    chart
        .draw_series(
            xs.iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Circle::new((x, y), POINT_SIZE, DARK_BLUE.filled())),
        )?
        .label("Data Points")
        .legend(|(x, y)| Circle::new((x + 10, y), POINT_SIZE, DARK_BLUE.filled()));

    chart
        .draw_series(std::iter::once(PathElement::new(
            line_points,
            DARK_RED.stroke_width(1),
        )))?
        .label("Regression Line")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], DARK_RED.filled().stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root_area.present()?;

    Ok(())
}

fn bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    match values.minmax_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)) {
        MinMaxResult::NoElements => (0.0, 1.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    }
}

/// Widens `[lo, hi]` by 5% on each side, or by one unit when the interval is empty
fn padded(lo: f64, hi: f64) -> Range<f64> {
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}
