use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::Result;
use crate::model::grid::RenderedGrid;
use crate::repository::{ActivitySource, ImageSink};
use crate::service::grid_renderer::{render_with, RenderOptions};
use crate::service::{raster, svg};
use crate::time;

#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub year: i32,
    pub options: RenderOptions,
    pub write_svg: bool,
    pub write_png: bool,
}

impl RenderRequest {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            options: RenderOptions::default(),
            write_svg: true,
            write_png: false,
        }
    }
}

#[derive(Debug)]
pub struct RenderOutcome {
    pub grid: RenderedGrid,
    pub written: Vec<PathBuf>,
}

pub struct RenderCalendarUseCase<'a, S: ActivitySource, K: ImageSink> {
    source: &'a S,
    sink: &'a K,
}

impl<'a, S: ActivitySource, K: ImageSink> RenderCalendarUseCase<'a, S, K> {
    pub fn new(source: &'a S, sink: &'a K) -> Self {
        Self { source, sink }
    }

    /// Loads, renders and writes `<name>.svg` and/or `<name>.png`.
    ///
    /// Both documents are produced in memory first, so a parse or raster
    /// failure writes nothing.
    pub fn execute(&self, request: &RenderRequest) -> Result<RenderOutcome> {
        let year = time::validate_year(request.year)?;
        let activity = self.source.load()?;

        let ignored = activity.len() - activity.for_year(year).count();
        if ignored > 0 {
            warn!(year, ignored, "entries outside the target year are ignored");
        }

        let grid = render_with(&activity, year, &request.options);
        let document = svg::to_svg(&grid);
        let png = if request.write_png {
            Some(raster::svg_to_png(&document)?)
        } else {
            None
        };

        let name = self.source.name();
        let mut written = Vec::new();
        if request.write_svg {
            written.push(self.sink.write(&format!("{name}.svg"), document.as_bytes())?);
        }
        if let Some(png) = png {
            written.push(self.sink.write(&format!("{name}.png"), &png)?);
        }

        info!(year, files = written.len(), "rendered contribution calendar");
        Ok(RenderOutcome { grid, written })
    }
}
