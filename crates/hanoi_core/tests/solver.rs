use std::collections::VecDeque;

use hanoi_core::solver::{hint, solve};
use hanoi_core::{Disk, GameState, HanoiMove, Tower, DESTINATION_TOWER, TOWER_COUNT};
use pretty_assertions::assert_eq;

/// Builds the unique legal arrangement where disk `size` sits on `positions[size - 1]`.
fn arrangement(positions: &[usize]) -> GameState {
    let mut towers = [0, 1, 2].map(|id| Tower {
        id,
        disks: Vec::new(),
    });
    for size in (1..=positions.len()).rev() {
        let size_u8 = u8::try_from(size).unwrap();
        towers[positions[size - 1]].disks.push(Disk {
            id: size_u8,
            size: size_u8,
        });
    }
    GameState {
        towers,
        moves: 0,
        is_complete: positions.iter().all(|&tower| tower == DESTINATION_TOWER),
        selected_disk: None,
    }
}

fn top_of(positions: &[usize], tower: usize) -> Option<usize> {
    positions.iter().position(|&p| p == tower)
}

fn legal_moves(positions: &[usize]) -> Vec<HanoiMove> {
    let mut moves = Vec::new();
    for from in 0..TOWER_COUNT {
        let Some(disk) = top_of(positions, from) else {
            continue;
        };
        for to in 0..TOWER_COUNT {
            if to == from {
                continue;
            }
            if top_of(positions, to).is_none_or(|onto| disk < onto) {
                moves.push(HanoiMove { from, to });
            }
        }
    }
    moves
}

fn apply(positions: &mut [usize], hanoi_move: HanoiMove) {
    let disk = top_of(positions, hanoi_move.from).expect("source has a disk");
    positions[disk] = hanoi_move.to;
}

fn encode(positions: &[usize]) -> usize {
    positions.iter().rev().fold(0, |acc, &p| acc * 3 + p)
}

fn decode(mut code: usize, disk_count: usize) -> Vec<usize> {
    (0..disk_count)
        .map(|_| {
            let p = code % 3;
            code /= 3;
            p
        })
        .collect()
}

/// Shortest distance from every arrangement to the solved one.
fn distances_to_goal(disk_count: usize) -> Vec<usize> {
    let total = 3usize.pow(disk_count as u32);
    let mut distance = vec![usize::MAX; total];
    let goal = encode(&vec![DESTINATION_TOWER; disk_count]);
    distance[goal] = 0;
    let mut queue = VecDeque::from([goal]);
    while let Some(code) = queue.pop_front() {
        let positions = decode(code, disk_count);
        for hanoi_move in legal_moves(&positions) {
            let mut next = positions.clone();
            apply(&mut next, hanoi_move);
            let next_code = encode(&next);
            if distance[next_code] == usize::MAX {
                distance[next_code] = distance[code] + 1;
                queue.push_back(next_code);
            }
        }
    }
    distance
}

#[test]
fn solution_length_is_optimal() {
    for disk_count in 1..=8u8 {
        let solution = solve(disk_count);
        assert_eq!(solution.len(), (1usize << disk_count) - 1);
    }
}

#[test]
fn solution_only_uses_legal_moves() {
    let disk_count = 5;
    let mut positions = vec![0; disk_count];
    for hanoi_move in solve(disk_count as u8) {
        assert!(legal_moves(&positions).contains(&hanoi_move));
        apply(&mut positions, hanoi_move);
    }
    assert_eq!(positions, vec![DESTINATION_TOWER; disk_count]);
}

#[test]
fn hints_follow_a_shortest_path_from_any_arrangement() {
    for disk_count in [3usize, 4] {
        let distances = distances_to_goal(disk_count);
        for (code, &distance) in distances.iter().enumerate() {
            let mut positions = decode(code, disk_count);
            let mut steps = 0;
            while let Some(next) = hint(&arrangement(&positions)) {
                assert!(
                    legal_moves(&positions).contains(&next),
                    "illegal hint {next:?} for {positions:?}"
                );
                apply(&mut positions, next);
                steps += 1;
                assert!(steps <= distance, "hint path longer than optimal");
            }
            assert_eq!(positions, vec![DESTINATION_TOWER; disk_count]);
            assert_eq!(steps, distance);
        }
    }
}

#[test]
fn solved_arrangement_needs_no_hint() {
    assert_eq!(hint(&arrangement(&[2, 2, 2])), None);
}

#[test]
fn hand_built_state_with_unknown_tower_id_gets_no_hint() {
    let mut state = arrangement(&[0, 0, 0]);
    state.towers[0].id = 7;
    assert_eq!(hint(&state), None);

    let mut state = arrangement(&[1, 0, 0]);
    state.towers[1].id = 5;
    assert_eq!(hint(&state), None);
}
