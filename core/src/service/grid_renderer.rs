use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::activity::ActivityMap;
use crate::model::grid::{
    DayCell, MonthMarker, RenderedGrid, CELL_SIZE, COLUMNS, DAY_PITCH, MARGIN, ROWS, X_OFFSET,
    Y_OFFSET,
};
use crate::model::palette::{ActivityLevel, Palette};
use crate::time;

/// How a day's row inside its week column is chosen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RowLayout {
    /// Row is the real weekday, Sunday = 0.
    #[default]
    Weekday,
    /// Row is the day index mod 7, so January 1 always sits in row 0.
    Sequential,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub row_layout: RowLayout,
    pub palette: Palette,
}

pub fn render(activity: &ActivityMap, year: i32) -> RenderedGrid {
    render_with(activity, year, &RenderOptions::default())
}

/// Lays out every day of `year` on a 53x7 grid.
///
/// The column is always the flat day index divided by 7. A month gets a
/// label the first time one of its days lands in row 0.
pub fn render_with(activity: &ActivityMap, year: i32, options: &RenderOptions) -> RenderedGrid {
    let mut cells = Vec::with_capacity(time::days_in_year(year) as usize);
    let mut markers = Vec::new();
    let mut seen_months = [false; 12];

    for (index, date) in time::year_dates(year).enumerate() {
        let index = index as u32;
        let row = match options.row_layout {
            RowLayout::Weekday => time::weekday_row(date),
            RowLayout::Sequential => index % ROWS,
        };
        let count = activity.count(date);
        let level = ActivityLevel::from_count(count);

        let cell = DayCell {
            date,
            count,
            column: index / ROWS,
            row,
            level,
            fill: options.palette.color(level).to_string(),
        };

        let month = date.month0();
        if row == 0 && !seen_months[month as usize] {
            seen_months[month as usize] = true;
            markers.push(MonthMarker { x: cell.x(), month });
        }

        cells.push(cell);
    }

    markers.sort_by_key(|m| m.x);
    let (width, height) = canvas_size(&markers);

    debug!(
        year,
        cells = cells.len(),
        markers = markers.len(),
        width,
        height,
        "rendered calendar grid"
    );

    RenderedGrid {
        year,
        cells,
        markers,
        width,
        height,
    }
}

pub fn canvas_size(markers: &[MonthMarker]) -> (u32, u32) {
    let grid_width = COLUMNS * DAY_PITCH + X_OFFSET + MARGIN;
    let last_x = markers.last().map(|m| m.x).unwrap_or(X_OFFSET);
    let width = grid_width.max(last_x + CELL_SIZE + MARGIN);
    let height = ROWS * DAY_PITCH + Y_OFFSET + MARGIN;
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_activity;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cell_count_matches_year_length() {
        let empty = ActivityMap::new();
        assert_eq!(render(&empty, 2023).cells.len(), 365);
        assert_eq!(render(&empty, 2024).cells.len(), 366);
        assert_eq!(render(&empty, 1900).cells.len(), 365);
        assert_eq!(render(&empty, 2000).cells.len(), 366);
    }

    #[test]
    fn test_cells_are_contiguous() {
        let grid = render(&ActivityMap::new(), 2024);
        assert_eq!(grid.cells.first().unwrap().date, date(2024, 1, 1));
        assert_eq!(grid.cells.last().unwrap().date, date(2024, 12, 31));
        for pair in grid.cells.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_example_colors() {
        let activity = parse_activity(r#"{"2024-01-01": 3, "2024-03-05": 12}"#).unwrap();
        let grid = render(&activity, 2024);
        let palette = Palette::default();

        assert_eq!(grid.cells.len(), 366);
        assert_eq!(grid.cell(date(2024, 1, 1)).unwrap().fill, palette.low);
        assert_eq!(grid.cell(date(2024, 3, 5)).unwrap().fill, palette.high);

        let neutral = grid
            .cells
            .iter()
            .filter(|c| c.fill == palette.none)
            .count();
        assert_eq!(neutral, 364);
    }

    #[test]
    fn test_empty_input_is_all_neutral() {
        let grid = render(&ActivityMap::new(), 2023);
        assert_eq!(grid.cells.len(), 365);
        assert!(grid.cells.iter().all(|c| c.level == ActivityLevel::None));
        assert_eq!(grid.width, COLUMNS * DAY_PITCH + X_OFFSET + MARGIN);
        assert_eq!(grid.width, 656);
        assert_eq!(grid.height, 114);
    }

    #[test]
    fn test_dates_outside_year_are_ignored() {
        let activity =
            parse_activity(r#"{"2023-12-31": 50, "2025-01-01": 50, "2024-07-04": 5}"#).unwrap();
        let grid = render(&activity, 2024);
        assert_eq!(grid.cells.len(), 366);
        let colored: Vec<_> = grid
            .cells
            .iter()
            .filter(|c| c.level != ActivityLevel::None)
            .collect();
        assert_eq!(colored.len(), 1);
        assert_eq!(colored[0].date, date(2024, 7, 4));
        assert_eq!(colored[0].level, ActivityLevel::Medium);
    }

    #[test]
    fn test_positions_use_weekday_rows() {
        let grid = render(&ActivityMap::new(), 2024);
        // 2024-01-01 is a Monday
        let jan1 = grid.cell(date(2024, 1, 1)).unwrap();
        assert_eq!((jan1.column, jan1.row), (0, 1));
        let jan7 = grid.cell(date(2024, 1, 7)).unwrap();
        assert_eq!((jan7.column, jan7.row), (0, 0));
        let jan8 = grid.cell(date(2024, 1, 8)).unwrap();
        assert_eq!((jan8.column, jan8.row), (1, 1));

        let dec31 = grid.cell(date(2024, 12, 31)).unwrap();
        assert_eq!(dec31.column, 52);
        assert_eq!(grid.columns(), 53);
    }

    #[test]
    fn test_no_two_cells_share_a_slot() {
        for year in [2021, 2023, 2024] {
            let grid = render(&ActivityMap::new(), year);
            let slots: HashSet<_> = grid.cells.iter().map(|c| (c.column, c.row)).collect();
            assert_eq!(slots.len(), grid.cells.len());
        }
    }

    #[test]
    fn test_sequential_layout() {
        let options = RenderOptions {
            row_layout: RowLayout::Sequential,
            ..RenderOptions::default()
        };
        let grid = render_with(&ActivityMap::new(), 2024, &options);
        for (i, cell) in grid.cells.iter().enumerate() {
            assert_eq!(cell.row, i as u32 % 7);
            assert_eq!(cell.column, i as u32 / 7);
        }
        // January 1 is in row 0, so January is labeled at the first column
        assert_eq!(grid.markers[0], MonthMarker { x: X_OFFSET, month: 0 });
    }

    #[test]
    fn test_month_markers() {
        let grid = render(&ActivityMap::new(), 2024);
        assert!(grid.markers.len() <= 12);

        let months: HashSet<_> = grid.markers.iter().map(|m| m.month).collect();
        assert_eq!(months.len(), grid.markers.len());
        for pair in grid.markers.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }

        // First Sunday of January 2024 is the 7th (index 6, column 0)
        assert_eq!(grid.markers[0], MonthMarker { x: X_OFFSET, month: 0 });
        // First Sunday of February 2024 is the 4th (index 34, column 4)
        assert_eq!(grid.markers[1], MonthMarker { x: X_OFFSET + 4 * DAY_PITCH, month: 1 });
        assert_eq!(grid.markers[1].column(), 4);
        assert_eq!(grid.markers[1].label(), "Feb");
    }

    #[test]
    fn test_markers_never_widen_the_canvas() {
        for year in 2000..2030 {
            let grid = render(&ActivityMap::new(), year);
            assert_eq!(grid.width, 656, "year {year}");
        }
    }

    #[test]
    fn test_canvas_size_grows_for_far_marker() {
        let far = [MonthMarker { x: 700, month: 11 }];
        assert_eq!(canvas_size(&far), (720, 114));
        assert_eq!(canvas_size(&[]), (656, 114));
    }

    #[test]
    fn test_render_is_deterministic() {
        let activity = parse_activity(r#"{"2024-02-29": 9, "2024-11-11": 1}"#).unwrap();
        assert_eq!(render(&activity, 2024), render(&activity, 2024));
    }

    #[test]
    fn test_custom_palette() {
        let options = RenderOptions {
            palette: Palette {
                high: "#000000".to_string(),
                ..Palette::default()
            },
            ..RenderOptions::default()
        };
        let activity = parse_activity(r#"{"2024-05-01": 10}"#).unwrap();
        let grid = render_with(&activity, 2024, &options);
        assert_eq!(grid.cell(date(2024, 5, 1)).unwrap().fill, "#000000");
    }

    #[test]
    fn test_unrepresentable_year_renders_nothing() {
        let grid = render(&ActivityMap::new(), i32::MAX);
        assert!(grid.cells.is_empty());
        assert!(grid.markers.is_empty());
    }
}
