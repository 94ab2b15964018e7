use chrono::NaiveDate;

use crate::model::palette::ActivityLevel;
use crate::time::month_abbrev;

// Layout, in SVG user units
pub const CELL_SIZE: u32 = 10;
pub const CELL_PADDING: u32 = 2;
pub const DAY_PITCH: u32 = CELL_SIZE + CELL_PADDING;
pub const CORNER_RADIUS: u32 = 2;
pub const COLUMNS: u32 = 53; // weeks in a year
pub const ROWS: u32 = 7; // days in a week
pub const X_OFFSET: u32 = 10;
pub const Y_OFFSET: u32 = 20;
pub const MARGIN: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u64,
    pub column: u32,
    pub row: u32,
    pub level: ActivityLevel,
    pub fill: String,
}

impl DayCell {
    pub fn x(&self) -> u32 {
        X_OFFSET + self.column * DAY_PITCH
    }

    pub fn y(&self) -> u32 {
        Y_OFFSET + self.row * DAY_PITCH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthMarker {
    pub x: u32,
    /// 0 = January
    pub month: u32,
}

impl MonthMarker {
    pub fn label(&self) -> &'static str {
        month_abbrev(self.month)
    }

    pub fn column(&self) -> u32 {
        (self.x - X_OFFSET) / DAY_PITCH
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    pub year: i32,
    pub cells: Vec<DayCell>,
    pub markers: Vec<MonthMarker>,
    pub width: u32,
    pub height: u32,
}

impl RenderedGrid {
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells
            .binary_search_by_key(&date, |c| c.date)
            .ok()
            .map(|i| &self.cells[i])
    }

    pub fn columns(&self) -> u32 {
        self.cells.last().map(|c| c.column + 1).unwrap_or(0)
    }
}
