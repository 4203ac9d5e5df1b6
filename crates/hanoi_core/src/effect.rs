#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SavePreferences(crate::UiPreferences),
    AnnounceSolved {
        moves: u32,
        optimal: u64,
        performance: crate::Performance,
    },
    Quit,
}
