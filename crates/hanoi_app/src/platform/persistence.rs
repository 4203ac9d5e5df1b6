use chrono::Utc;
use hanoi_core::{Difficulty, UiPreferences};
use hanoi_logging::{hanoi_error, hanoi_info, hanoi_warn};
use hanoi_store::StateStore;
use serde::{Deserialize, Serialize};

const PREFERENCES_FILENAME: &str = "preferences.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPreferences {
    disk_count: u8,
    hint_dismissed: bool,
    #[serde(default)]
    saved_utc: Option<String>,
}

pub(crate) fn load_preferences(store: &StateStore) -> Option<UiPreferences> {
    let content = match store.read(PREFERENCES_FILENAME) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(err) => {
            hanoi_warn!("Failed to read preferences from {:?}: {}", store.dir(), err);
            return None;
        }
    };

    let persisted: PersistedPreferences = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            hanoi_warn!("Failed to parse preferences in {:?}: {}", store.dir(), err);
            return None;
        }
    };

    let difficulty = Difficulty::from_disk_count(persisted.disk_count).unwrap_or_else(|err| {
        hanoi_warn!("Saved difficulty ignored: {}", err);
        Difficulty::default()
    });

    hanoi_info!(
        "Loaded preferences from {:?} (saved {})",
        store.dir(),
        persisted.saved_utc.as_deref().unwrap_or("at an unknown time")
    );
    Some(UiPreferences {
        difficulty,
        hint_dismissed: persisted.hint_dismissed,
    })
}

pub(crate) fn save_preferences(store: &StateStore, preferences: UiPreferences) {
    let persisted = PersistedPreferences {
        disk_count: preferences.difficulty.disk_count(),
        hint_dismissed: preferences.hint_dismissed,
        saved_utc: Some(Utc::now().to_rfc3339()),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            hanoi_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = store.write(PREFERENCES_FILENAME, &content) {
        hanoi_error!("Failed to write preferences to {:?}: {}", store.dir(), err);
    }
}
