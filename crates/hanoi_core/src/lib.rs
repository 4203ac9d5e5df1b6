//! Hanoi core: the puzzle rules engine, its solver, and the pure UI model.
mod effect;
mod error;
mod game;
mod layout;
mod msg;
mod observer;
pub mod solver;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{CoreError, MoveRejection};
pub use game::{optimal_moves, MoveRecord, TowerOfHanoi};
pub use layout::LayoutMode;
pub use msg::Msg;
pub use observer::{ChangeCounter, StateObserver};
pub use solver::HanoiMove;
pub use state::{
    AppState, Difficulty, Disk, DiskId, GameState, Phase, Tower, TowerId, UiPreferences,
    DESTINATION_TOWER, SOURCE_TOWER, TOWER_COUNT,
};
pub use update::update;
pub use view_model::{AppViewModel, Notice, Performance, TowerView, TOWER_LABELS};
