use hanoi_core::{LayoutMode, TOWER_COUNT};

/// Wide enough for the longest tower label, "3 Destination".
const MIN_COLUMN_WIDTH: usize = 13;

/// Cells reserved for one tower: its widest disk with selection markers and a margin.
pub fn column_width(disk_count: u8) -> usize {
    // 2n - 1 for the disk, two markers, one blank on each side.
    (2 * usize::from(disk_count) + 3).max(MIN_COLUMN_WIDTH)
}

/// Blank cells between neighbouring towers.
pub fn gutter(layout: LayoutMode) -> usize {
    match layout {
        LayoutMode::Desktop => 4,
        LayoutMode::Tablet => 2,
        LayoutMode::MobileLandscape | LayoutMode::MobilePortrait => 1,
    }
}

/// Width of the whole board, or of a single tower when towers are stacked.
pub fn board_width(layout: LayoutMode, disk_count: u8) -> usize {
    if layout.is_stacked() {
        return column_width(disk_count);
    }
    TOWER_COUNT * column_width(disk_count) + (TOWER_COUNT - 1) * gutter(layout)
}
