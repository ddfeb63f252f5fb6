/// Earliest year an anchor or selected date may carry (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Latest year an anchor or selected date may carry (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Days in a week, and columns in the day grid
pub const DAYS_PER_WEEK: usize = 7;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Rows in the day grid. Six weeks always covers a month plus trailing context.
pub const DAY_GRID_ROWS: usize = 6;
/// Cells in the day grid
pub const DAY_GRID_CELLS: usize = DAY_GRID_ROWS * DAYS_PER_WEEK;

/// Rows in the month and decade grids
pub const COARSE_GRID_ROWS: usize = 3;
/// Columns in the month and decade grids
pub const COARSE_GRID_COLUMNS: usize = 4;

/// Years spanned by one decade page (excluding the two context cells)
pub const DECADE_SPAN: i32 = 10;
/// Offset from the decade start used as the anchor while the decade grid is shown
pub const DECADE_MIDDLE_OFFSET: i32 = 5;

/// Columns occupied by the previous and next buttons in the header row
pub(crate) const NAV_BUTTON_COLUMNS: usize = 2;
/// Colspan of each cell in the month and decade grids
pub(crate) const COARSE_CELL_COLSPAN: usize = 2;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
