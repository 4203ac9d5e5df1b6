//! Optimal move sequences.
//!
//! [`solve`] produces the classic recursive solution from the starting
//! arrangement. [`hint`] finds the next move of an optimal path from any
//! legal arrangement, which is what a player asking for help mid-game needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GameState, TowerId, DESTINATION_TOWER, SOURCE_TOWER, TOWER_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HanoiMove {
    pub from: TowerId,
    pub to: TowerId,
}

impl fmt::Display for HanoiMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The `2^n - 1` moves that carry `disk_count` disks from the source tower to the destination.
pub fn solve(disk_count: u8) -> Vec<HanoiMove> {
    let capacity = usize::try_from(crate::optimal_moves(disk_count)).unwrap_or(0);
    let mut moves = Vec::with_capacity(capacity);
    solve_recursive(disk_count, SOURCE_TOWER, DESTINATION_TOWER, 1, &mut moves);
    moves
}

fn solve_recursive(n: u8, from: TowerId, to: TowerId, spare: TowerId, moves: &mut Vec<HanoiMove>) {
    if n == 0 {
        return;
    }
    solve_recursive(n - 1, from, spare, to, moves);
    moves.push(HanoiMove { from, to });
    solve_recursive(n - 1, spare, to, from, moves);
}

/// Next move on a shortest path to the solved arrangement.
///
/// Returns `None` when the puzzle is already solved, or the state does not
/// hold a complete set of disks sized `1..=n` on towers `0..3`.
pub fn hint(state: &GameState) -> Option<HanoiMove> {
    if state.is_complete {
        return None;
    }
    let positions = disk_positions(state)?;
    first_move(&positions, positions.len(), DESTINATION_TOWER)
}

/// `positions[size - 1]` is the tower holding the disk of that size.
fn disk_positions(state: &GameState) -> Option<Vec<TowerId>> {
    let mut positions = vec![None; state.disk_count()];
    for tower in &state.towers {
        if tower.id >= TOWER_COUNT {
            return None;
        }
        for disk in &tower.disks {
            let slot = positions.get_mut(usize::from(disk.size).checked_sub(1)?)?;
            *slot = Some(tower.id);
        }
    }
    positions.into_iter().collect()
}

/// First move that brings disks `1..=n` onto `target`.
///
/// If the largest of them already sits on `target` it can stay there.
/// Otherwise everything above it has to clear out to the remaining tower
/// first, and once that is done the largest disk moves.
fn first_move(positions: &[TowerId], n: usize, target: TowerId) -> Option<HanoiMove> {
    if n == 0 {
        return None;
    }
    let largest = positions[n - 1];
    if largest == target {
        return first_move(positions, n - 1, target);
    }
    let spare = TOWER_COUNT.checked_sub(largest + target)?;
    first_move(positions, n - 1, spare).or(Some(HanoiMove {
        from: largest,
        to: target,
    }))
}
