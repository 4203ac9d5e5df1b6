use hanoi_logging::hanoi_warn;

use crate::{AppState, Difficulty, Effect, LayoutMode, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TowerTapped(tower) => state.tap_tower(tower).into_iter().collect(),
        Msg::MoveRequested { from, to } => state.request_move(from, to).into_iter().collect(),
        Msg::ResetClicked => {
            state.reset_game();
            Vec::new()
        }
        Msg::PlayAgainClicked => {
            // Only offered on the win panel.
            if state.is_solved() {
                state.reset_game();
            }
            Vec::new()
        }
        Msg::DifficultyChanged(disk_count) => match Difficulty::from_disk_count(disk_count) {
            Ok(difficulty) => {
                state.change_difficulty(difficulty);
                vec![Effect::SavePreferences(state.preferences())]
            }
            Err(err) => {
                hanoi_warn!("ignoring difficulty change: {}", err);
                state.set_notice(Notice::UnsupportedDifficulty(disk_count));
                Vec::new()
            }
        },
        Msg::InfoOpened => {
            state.set_info_visible(true);
            Vec::new()
        }
        Msg::InfoClosed => {
            state.set_info_visible(false);
            Vec::new()
        }
        Msg::HintRequested => {
            state.show_hint();
            Vec::new()
        }
        Msg::HintBannerDismissed { permanently } => {
            state.dismiss_hint_banner(permanently);
            if permanently {
                vec![Effect::SavePreferences(state.preferences())]
            } else {
                Vec::new()
            }
        }
        Msg::RestorePreferences(preferences) => {
            state.restore_preferences(preferences);
            Vec::new()
        }
        Msg::ViewportResized { columns, rows } => {
            state.set_layout(LayoutMode::classify(columns, rows));
            Vec::new()
        }
        Msg::InputRejected(input) => {
            state.set_notice(Notice::UnknownCommand(input));
            Vec::new()
        }
        Msg::RedrawRequested => {
            state.mark_dirty();
            Vec::new()
        }
        Msg::QuitRequested => vec![Effect::Quit],
    };

    (state, effects)
}
