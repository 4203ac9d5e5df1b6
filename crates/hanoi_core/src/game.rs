use std::fmt;

use hanoi_logging::{hanoi_debug, hanoi_info, hanoi_trace};

use crate::{
    CoreError, Difficulty, Disk, GameState, MoveRejection, StateObserver, TowerId,
    DESTINATION_TOWER, TOWER_COUNT,
};

/// Minimum number of moves that solves `disk_count` disks: `2^n - 1`.
pub fn optimal_moves(disk_count: u8) -> u64 {
    1u64.checked_shl(u32::from(disk_count))
        .map_or(u64::MAX, |power| power - 1)
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub disk: Disk,
    pub from: TowerId,
    pub to: TowerId,
    /// Move counter after this move.
    pub moves: u32,
    /// True only on the move that solved the puzzle.
    pub solved: bool,
}

/// The puzzle state machine.
///
/// Owns the tower arrangement, validates every move, and notifies its
/// observers synchronously after each change. Changing the disk count means
/// building a new machine; the towers are never resized in place.
pub struct TowerOfHanoi {
    difficulty: Difficulty,
    state: GameState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl fmt::Debug for TowerOfHanoi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TowerOfHanoi")
            .field("difficulty", &self.difficulty)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TowerOfHanoi {
    pub fn new(
        disk_count: u8,
        on_change: impl StateObserver + 'static,
    ) -> Result<Self, CoreError> {
        let difficulty = Difficulty::from_disk_count(disk_count)?;
        Ok(Self::from_difficulty(difficulty, on_change))
    }

    pub fn from_difficulty(difficulty: Difficulty, on_change: impl StateObserver + 'static) -> Self {
        hanoi_logging::set_move_count(0);
        hanoi_info!(
            "new game: {} ({} disks)",
            difficulty.label(),
            difficulty.disk_count()
        );
        Self {
            difficulty,
            state: GameState::initial(difficulty.disk_count()),
            observers: vec![Box::new(on_change)],
        }
    }

    /// Discards this game and starts a fresh one with `difficulty`, keeping the observers.
    pub fn restart_with(self, difficulty: Difficulty) -> Self {
        hanoi_logging::set_move_count(0);
        hanoi_info!(
            "restart: {} -> {} ({} disks)",
            self.difficulty.label(),
            difficulty.label(),
            difficulty.disk_count()
        );
        Self {
            difficulty,
            state: GameState::initial(difficulty.disk_count()),
            observers: self.observers,
        }
    }

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn disk_count(&self) -> u8 {
        self.difficulty.disk_count()
    }

    pub fn optimal_moves(&self) -> u64 {
        optimal_moves(self.disk_count())
    }

    /// Independent copy of the current state.
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    pub(crate) fn current(&self) -> &GameState {
        &self.state
    }

    /// Applies a move if it is legal. Returns whether anything changed.
    pub fn move_disk(&mut self, from: TowerId, to: TowerId) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like [`Self::move_disk`], but reports why a move was refused.
    pub fn try_move(&mut self, from: TowerId, to: TowerId) -> Result<MoveRecord, MoveRejection> {
        let record = self.apply_move(from, to).inspect_err(|rejection| {
            hanoi_debug!("move {} -> {} rejected: {}", from, to, rejection);
        })?;

        hanoi_logging::set_move_count(record.moves);
        hanoi_trace!(
            "disk {} moved {} -> {}",
            record.disk.size,
            record.from,
            record.to
        );
        if record.solved {
            hanoi_info!(
                "solved {} disks in {} moves (optimal {})",
                self.disk_count(),
                record.moves,
                self.optimal_moves()
            );
        }
        self.notify();
        Ok(record)
    }

    fn apply_move(&mut self, from: TowerId, to: TowerId) -> Result<MoveRecord, MoveRejection> {
        for index in [from, to] {
            if index >= TOWER_COUNT {
                return Err(MoveRejection::UnknownTower { index });
            }
        }
        if self.state.is_complete {
            return Err(MoveRejection::AlreadySolved);
        }

        let candidate = *self.state.towers[from]
            .top()
            .ok_or(MoveRejection::EmptySource { tower: from })?;
        if from == to {
            return Err(MoveRejection::SameTower {
                tower: from,
                disk: candidate.size,
            });
        }
        if let Some(top) = self.state.towers[to].top() {
            if top.size <= candidate.size {
                return Err(MoveRejection::OntoSmallerDisk {
                    disk: candidate.size,
                    onto: top.size,
                });
            }
        }

        let disk = self.state.towers[from]
            .disks
            .pop()
            .ok_or(MoveRejection::EmptySource { tower: from })?;
        self.state.towers[to].disks.push(disk);
        self.state.moves += 1;
        self.state.selected_disk = None;

        // Every accepted move keeps each tower descending, so a full
        // destination tower is necessarily the solved stack.
        let solved =
            self.state.towers[DESTINATION_TOWER].len() == usize::from(self.disk_count());
        if solved {
            debug_assert!(self.state.towers[DESTINATION_TOWER].is_descending());
            self.state.is_complete = true;
        }

        Ok(MoveRecord {
            disk,
            from,
            to,
            moves: self.state.moves,
            solved,
        })
    }

    /// Marks the top disk of `tower` as selected.
    pub fn try_select(&mut self, tower: TowerId) -> Result<Disk, MoveRejection> {
        if tower >= TOWER_COUNT {
            return Err(MoveRejection::UnknownTower { index: tower });
        }
        if self.state.is_complete {
            return Err(MoveRejection::AlreadySolved);
        }
        let disk = *self.state.towers[tower]
            .top()
            .ok_or(MoveRejection::EmptySource { tower })?;
        if self.state.selected_disk != Some(disk) {
            self.state.selected_disk = Some(disk);
            self.notify();
        }
        Ok(disk)
    }

    pub fn select_top(&mut self, tower: TowerId) -> bool {
        self.try_select(tower).is_ok()
    }

    pub fn clear_selection(&mut self) {
        if self.state.selected_disk.take().is_some() {
            self.notify();
        }
    }

    /// Puts every disk back on the source tower and zeroes the move counter.
    pub fn reset(&mut self) {
        self.state = GameState::initial(self.disk_count());
        hanoi_logging::set_move_count(0);
        hanoi_info!("reset: {} disks", self.disk_count());
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.state_changed(&self.state);
        }
    }
}
