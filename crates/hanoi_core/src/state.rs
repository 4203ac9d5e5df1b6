use serde::{Deserialize, Serialize};

use crate::solver::{self, HanoiMove};
use crate::view_model::{AppViewModel, Notice, Performance, TowerView, TOWER_LABELS};
use crate::{ChangeCounter, CoreError, Effect, LayoutMode, TowerOfHanoi};

pub type DiskId = u8;
pub type TowerId = usize;

pub const TOWER_COUNT: usize = 3;
/// Tower holding every disk when a game starts.
pub const SOURCE_TOWER: TowerId = 0;
/// Tower that must hold every disk for the puzzle to count as solved.
pub const DESTINATION_TOWER: TowerId = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disk {
    pub id: DiskId,
    pub size: u8,
}

/// One of the three fixed stacks. `disks[0]` is the bottom, the last element is the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub disks: Vec<Disk>,
}

impl Tower {
    fn empty(id: TowerId) -> Self {
        Self {
            id,
            disks: Vec::new(),
        }
    }

    pub fn top(&self) -> Option<&Disk> {
        self.disks.last()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disk sizes from bottom to top.
    pub fn sizes(&self) -> Vec<u8> {
        self.disks.iter().map(|disk| disk.size).collect()
    }

    /// True when sizes strictly decrease from bottom to top.
    pub fn is_descending(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0].size > pair[1].size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Solved,
}

/// Snapshot of a game. Values handed out by [`TowerOfHanoi::state`] are
/// independent copies of the machine's internal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub towers: [Tower; TOWER_COUNT],
    pub moves: u32,
    pub is_complete: bool,
    /// Top disk picked by a first tap, waiting for a destination.
    pub selected_disk: Option<Disk>,
}

impl GameState {
    /// All disks on the source tower, largest at the bottom.
    pub(crate) fn initial(disk_count: u8) -> Self {
        let disks = (1..=disk_count)
            .rev()
            .map(|size| Disk { id: size, size })
            .collect();
        Self {
            towers: [
                Tower {
                    id: SOURCE_TOWER,
                    disks,
                },
                Tower::empty(1),
                Tower::empty(DESTINATION_TOWER),
            ],
            moves: 0,
            is_complete: false,
            selected_disk: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Solved
        } else {
            Phase::InProgress
        }
    }

    pub fn tower(&self, id: TowerId) -> Option<&Tower> {
        self.towers.get(id)
    }

    pub fn disk_count(&self) -> usize {
        self.towers.iter().map(Tower::len).sum()
    }

    /// Tower whose top disk is the current selection, if any.
    pub fn selected_tower(&self) -> Option<TowerId> {
        let selected = self.selected_disk?;
        self.towers
            .iter()
            .find(|tower| tower.top() == Some(&selected))
            .map(|tower| tower.id)
    }

    /// True when every tower keeps its sizes strictly decreasing upwards.
    pub fn is_well_ordered(&self) -> bool {
        self.towers.iter().all(Tower::is_descending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];
    pub const MIN_DISKS: u8 = 3;
    pub const MAX_DISKS: u8 = 6;

    pub fn disk_count(self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
            Difficulty::Expert => 6,
        }
    }

    pub fn from_disk_count(disk_count: u8) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.disk_count() == disk_count)
            .ok_or(CoreError::DiskCountOutOfRange {
                requested: disk_count,
                min: Self::MIN_DISKS,
                max: Self::MAX_DISKS,
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// UI settings that outlive a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiPreferences {
    pub difficulty: Difficulty,
    pub hint_dismissed: bool,
}

/// Everything the renderer needs: the running game plus transient UI state.
#[derive(Debug)]
pub struct AppState {
    game: TowerOfHanoi,
    changes: ChangeCounter,
    rendered_revision: u64,
    dirty: bool,
    info_visible: bool,
    hint_banner_visible: bool,
    hint_dismissed: bool,
    hint: Option<HanoiMove>,
    notice: Option<Notice>,
    layout: LayoutMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl AppState {
    pub fn new(difficulty: Difficulty) -> Self {
        let changes = ChangeCounter::new();
        Self {
            game: TowerOfHanoi::from_difficulty(difficulty, changes.clone()),
            rendered_revision: changes.revision(),
            changes,
            dirty: true,
            info_visible: false,
            hint_banner_visible: true,
            hint_dismissed: false,
            hint: None,
            notice: None,
            layout: LayoutMode::default(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        let game = self.game.current();
        let optimal_moves = self.game.optimal_moves();
        let selected_tower = game.selected_tower();
        let towers = game
            .towers
            .iter()
            .map(|tower| TowerView {
                id: tower.id,
                label: TOWER_LABELS[tower.id],
                disk_sizes: tower.sizes(),
                selected: selected_tower == Some(tower.id),
            })
            .collect();
        let performance = game
            .is_complete
            .then(|| Performance::rate(game.moves, optimal_moves));

        AppViewModel {
            difficulty: self.game.difficulty(),
            disk_count: self.game.disk_count(),
            towers,
            moves: game.moves,
            optimal_moves,
            phase: game.phase(),
            selected_tower,
            info_visible: self.info_visible,
            hint_banner_visible: self.hint_banner_visible,
            hint: self.hint,
            notice: self.notice.clone(),
            performance,
            layout: self.layout,
        }
    }

    /// Independent copy of the running game's state.
    pub fn snapshot(&self) -> GameState {
        self.game.state()
    }

    pub fn preferences(&self) -> UiPreferences {
        UiPreferences {
            difficulty: self.game.difficulty(),
            hint_dismissed: self.hint_dismissed,
        }
    }

    /// Returns true once for every batch of visible changes, then resets.
    pub fn consume_dirty(&mut self) -> bool {
        let revision = self.changes.revision();
        let game_changed = revision != self.rendered_revision;
        self.rendered_revision = revision;
        std::mem::take(&mut self.dirty) || game_changed
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    /// First tap selects, tapping the selection again drops it, any other tap moves.
    pub(crate) fn tap_tower(&mut self, tower: TowerId) -> Option<Effect> {
        match self.game.current().selected_tower() {
            Some(selected) if selected == tower => {
                self.game.clear_selection();
                self.clear_notice();
                None
            }
            Some(selected) => self.request_move(selected, tower),
            None => {
                match self.game.try_select(tower) {
                    Ok(_) => self.clear_notice(),
                    Err(rejection) => self.set_notice(Notice::Rejected(rejection)),
                }
                None
            }
        }
    }

    pub(crate) fn request_move(&mut self, from: TowerId, to: TowerId) -> Option<Effect> {
        match self.game.try_move(from, to) {
            Ok(record) => {
                self.clear_notice();
                self.hint = None;
                record.solved.then(|| {
                    let optimal = self.game.optimal_moves();
                    Effect::AnnounceSolved {
                        moves: record.moves,
                        optimal,
                        performance: Performance::rate(record.moves, optimal),
                    }
                })
            }
            Err(rejection) => {
                self.set_notice(Notice::Rejected(rejection));
                None
            }
        }
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.game.current().is_complete
    }

    pub(crate) fn reset_game(&mut self) {
        self.game.reset();
        self.hint = None;
        self.clear_notice();
    }

    /// Replaces the game wholesale; nothing from the old towers carries over.
    pub(crate) fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.game = TowerOfHanoi::from_difficulty(difficulty, self.changes.clone());
        self.hint = None;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn set_info_visible(&mut self, visible: bool) {
        if self.info_visible != visible {
            self.info_visible = visible;
            self.mark_dirty();
        }
    }

    pub(crate) fn show_hint(&mut self) {
        match solver::hint(self.game.current()) {
            Some(next) => {
                self.hint = Some(next);
                self.clear_notice();
                self.mark_dirty();
            }
            None => self.set_notice(Notice::HintUnavailable),
        }
    }

    pub(crate) fn dismiss_hint_banner(&mut self, permanently: bool) {
        self.hint_banner_visible = false;
        if permanently {
            self.hint_dismissed = true;
        }
        self.mark_dirty();
    }

    pub(crate) fn restore_preferences(&mut self, preferences: UiPreferences) {
        if preferences.difficulty != self.game.difficulty() {
            self.change_difficulty(preferences.difficulty);
        }
        self.hint_dismissed = preferences.hint_dismissed;
        self.hint_banner_visible = !preferences.hint_dismissed;
        self.mark_dirty();
    }

    pub(crate) fn set_layout(&mut self, layout: LayoutMode) {
        if self.layout != layout {
            self.layout = layout;
            self.mark_dirty();
        }
    }
}
