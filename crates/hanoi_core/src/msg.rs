#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User tapped a tower: selects its top disk, or moves the selection there.
    TowerTapped(crate::TowerId),
    /// User asked for a move in one gesture.
    MoveRequested {
        from: crate::TowerId,
        to: crate::TowerId,
    },
    /// User clicked Reset.
    ResetClicked,
    /// User clicked Play Again on the win panel.
    PlayAgainClicked,
    /// User picked a new disk count.
    DifficultyChanged(u8),
    /// User opened the rules panel.
    InfoOpened,
    /// User closed the rules panel.
    InfoClosed,
    /// User asked for the next optimal move.
    HintRequested,
    /// User hid the controls tip, optionally for good.
    HintBannerDismissed { permanently: bool },
    /// Restore settings persisted by a previous session.
    RestorePreferences(crate::UiPreferences),
    /// Screen size changed (terminal cells).
    ViewportResized { columns: u16, rows: u16 },
    /// Input that did not parse as a command.
    InputRejected(String),
    /// User asked for the board to be drawn again.
    RedrawRequested,
    /// User asked to leave.
    QuitRequested,
}
