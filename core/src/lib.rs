pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::AppConfig;
pub use error::{CalendarError, Result};
pub use input::parse_activity;
pub use model::activity::ActivityMap;
pub use model::grid::{DayCell, MonthMarker, RenderedGrid};
pub use model::palette::{ActivityLevel, Palette};
pub use repository::{ActivitySource, FileActivitySource, FileImageSink, ImageSink};
pub use service::grid_renderer::{render, render_with, RenderOptions, RowLayout};
pub use service::summary::{summarize, MonthSummary, YearSummary};
pub use service::svg::to_svg;
pub use usecase::render_calendar::{RenderCalendarUseCase, RenderOutcome, RenderRequest};
