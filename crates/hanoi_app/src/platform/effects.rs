use std::ops::ControlFlow;

use hanoi_core::Effect;
use hanoi_logging::hanoi_info;
use hanoi_store::StateStore;

use super::persistence;

pub struct EffectRunner {
    store: StateStore,
}

impl EffectRunner {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }

    /// Runs effects in order; breaks when the app should exit.
    pub fn run(&self, effects: Vec<Effect>) -> ControlFlow<()> {
        for effect in effects {
            match effect {
                Effect::SavePreferences(preferences) => {
                    hanoi_info!(
                        "SavePreferences difficulty={} hint_dismissed={}",
                        preferences.difficulty.label(),
                        preferences.hint_dismissed
                    );
                    persistence::save_preferences(&self.store, preferences);
                }
                Effect::AnnounceSolved {
                    moves,
                    optimal,
                    performance,
                } => {
                    hanoi_info!(
                        "AnnounceSolved moves={} optimal={} rating={}",
                        moves,
                        optimal,
                        performance.label()
                    );
                }
                Effect::Quit => return ControlFlow::Break(()),
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{Difficulty, Performance, UiPreferences};
    use tempfile::TempDir;

    #[test]
    fn save_effect_writes_preferences_and_quit_breaks() {
        let temp = TempDir::new().unwrap();
        let runner = EffectRunner::new(StateStore::new(temp.path()));
        let preferences = UiPreferences {
            difficulty: Difficulty::Medium,
            hint_dismissed: false,
        };

        let flow = runner.run(vec![
            Effect::SavePreferences(preferences),
            Effect::AnnounceSolved {
                moves: 15,
                optimal: 15,
                performance: Performance::Perfect,
            },
        ]);
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(
            persistence::load_preferences(&StateStore::new(temp.path())),
            Some(preferences)
        );

        assert_eq!(runner.run(vec![Effect::Quit]), ControlFlow::Break(()));
    }
}
