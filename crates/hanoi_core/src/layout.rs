/// Coarse screen class, measured in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    MobilePortrait,
    MobileLandscape,
    Tablet,
    #[default]
    Desktop,
}

impl LayoutMode {
    pub const MOBILE_MAX_COLUMNS: u16 = 60;
    pub const TABLET_MAX_COLUMNS: u16 = 90;

    pub fn classify(columns: u16, rows: u16) -> Self {
        if columns < Self::MOBILE_MAX_COLUMNS {
            // Cells are roughly twice as tall as they are wide.
            let portrait = u32::from(rows) * 2 >= u32::from(columns);
            return if portrait {
                LayoutMode::MobilePortrait
            } else {
                LayoutMode::MobileLandscape
            };
        }
        if columns < Self::TABLET_MAX_COLUMNS {
            return LayoutMode::Tablet;
        }
        LayoutMode::Desktop
    }

    /// Narrow portrait screens list the towers one below the other.
    pub fn is_stacked(self) -> bool {
        matches!(self, LayoutMode::MobilePortrait)
    }
}
