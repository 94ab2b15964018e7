use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

use crate::model::grid::{RenderedGrid, CELL_SIZE, CORNER_RADIUS, Y_OFFSET};
use crate::time::DATE_FORMAT;

const LABEL_COLOR: &str = "#333";
const LABEL_FONT_SIZE: u32 = 10;

pub fn build_document(grid: &RenderedGrid) -> Document {
    let mut group = Group::new().set("transform", "translate(0, 0)");

    for cell in &grid.cells {
        group = group.add(
            Rectangle::new()
                .set("width", CELL_SIZE)
                .set("height", CELL_SIZE)
                .set("x", cell.x())
                .set("y", cell.y())
                .set("class", "ContributionCalendar-day")
                .set("data-date", cell.date.format(DATE_FORMAT).to_string())
                .set("data-level", cell.count)
                .set("rx", CORNER_RADIUS)
                .set("ry", CORNER_RADIUS)
                .set("fill", cell.fill.as_str()),
        );
    }

    // Labels are centered over the marker's column
    for marker in &grid.markers {
        group = group.add(
            Text::new(marker.label())
                .set("x", marker.x + CELL_SIZE / 2)
                .set("y", Y_OFFSET - 5)
                .set("text-anchor", "middle")
                .set("fill", LABEL_COLOR)
                .set("font-size", LABEL_FONT_SIZE)
                .set("font-family", "sans-serif"),
        );
    }

    Document::new()
        .set("viewBox", (0, 0, grid.width, grid.height))
        .set("width", grid.width)
        .set("height", grid.height)
        .set("preserveAspectRatio", "xMidYMid meet")
        .add(group)
}

pub fn to_svg(grid: &RenderedGrid) -> String {
    build_document(grid).to_string()
}
