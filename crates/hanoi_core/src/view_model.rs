use serde::{Deserialize, Serialize};

use crate::{Difficulty, HanoiMove, LayoutMode, MoveRejection, Phase, TowerId, TOWER_COUNT};

pub const TOWER_LABELS: [&str; TOWER_COUNT] = ["Source", "Auxiliary", "Destination"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub difficulty: Difficulty,
    pub disk_count: u8,
    pub towers: Vec<TowerView>,
    pub moves: u32,
    pub optimal_moves: u64,
    pub phase: Phase,
    pub selected_tower: Option<TowerId>,
    pub info_visible: bool,
    pub hint_banner_visible: bool,
    pub hint: Option<HanoiMove>,
    pub notice: Option<Notice>,
    /// Present once the puzzle is solved.
    pub performance: Option<Performance>,
    pub layout: LayoutMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowerView {
    pub id: TowerId,
    pub label: &'static str,
    /// Bottom to top.
    pub disk_sizes: Vec<u8>,
    pub selected: bool,
}

/// Feedback line shown under the board until the next successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Rejected(MoveRejection),
    UnsupportedDifficulty(u8),
    UnknownCommand(String),
    HintUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Perfect,
    Excellent,
    Good,
    KeepPracticing,
}

impl Performance {
    /// Perfect at the optimum, Excellent within 1.5x, Good within 2x.
    pub fn rate(moves: u32, optimal: u64) -> Self {
        let moves = u64::from(moves);
        if moves <= optimal {
            Performance::Perfect
        } else if moves.saturating_mul(2) <= optimal.saturating_mul(3) {
            Performance::Excellent
        } else if moves <= optimal.saturating_mul(2) {
            Performance::Good
        } else {
            Performance::KeepPracticing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Performance::Perfect => "Perfect!",
            Performance::Excellent => "Excellent!",
            Performance::Good => "Good!",
            Performance::KeepPracticing => "Keep practicing!",
        }
    }
}
