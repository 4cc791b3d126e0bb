use super::{PlotContext, PlotData, PlotFormat, Plotter};
use crate::error::{Error, Result};
use plotters::prelude::*;
use std::path::PathBuf;

static DEFAULT_FONT: FontFamily = FontFamily::SansSerif;
// 5 x 5 inches at 96 dpi
static SIZE: (u32, u32) = (480, 480);
static POINT_SIZE: u32 = 3;

const DARK_BLUE: RGBColor = RGBColor(31, 120, 180);
const DARK_RED: RGBColor = RGBColor(227, 26, 28);

mod regression;

/// Renders figures with the `plotters` crate
#[derive(Default)]
pub struct PlottersBackend;

impl Plotter for PlottersBackend {
    fn regression(&mut self, ctx: PlotContext<'_>, data: PlotData<'_>) -> Result<PathBuf> {
        let path = ctx.figure_path();
        let title = ctx.dataset.title();
        let size = ctx.size.unwrap_or(SIZE);

        info!("Drawing {:?} ({}x{})", path, size.0, size.1);

        match ctx.format {
            PlotFormat::Svg => {
                let root_area = SVGBackend::new(&path, size).into_drawing_area();
                regression::regression_figure(root_area, &title, &data)
                    .map_err(|e| render_error(&path, e))?;
            }
            #[cfg(feature = "png")]
            PlotFormat::Png => {
                let root_area = BitMapBackend::new(&path, size).into_drawing_area();
                regression::regression_figure(root_area, &title, &data)
                    .map_err(|e| render_error(&path, e))?;
            }
            #[cfg(not(feature = "png"))]
            PlotFormat::Png => {
                return Err(Error::UnsupportedFormat(
                    "png (build with the `png` feature)".to_owned(),
                ));
            }
        }

        Ok(path)
    }
}

fn render_error<E: std::fmt::Display>(path: &std::path::Path, e: E) -> Error {
    Error::Render {
        path: path.to_owned(),
        message: e.to_string(),
    }
}
