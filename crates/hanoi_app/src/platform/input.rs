//! Line commands typed at the prompt.
//!
//! Towers are numbered from 1 on screen and from 0 in the core.

use hanoi_core::{Msg, TowerId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}` (type i for help)")]
    Unknown(String),
    #[error("`{0}` is not a tower number")]
    BadTower(String),
    #[error("`{0}` is not a disk count")]
    BadDiskCount(String),
    #[error("missing disk count, e.g. `d 4`")]
    MissingDiskCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    /// Print the game snapshot as JSON.
    DumpState,
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Command::Dispatch(Msg::RedrawRequested));
    };
    let rest: Vec<&str> = words.collect();

    let msg = match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("r" | "reset", []) => Msg::ResetClicked,
        ("p" | "again", []) => Msg::PlayAgainClicked,
        ("d" | "difficulty", []) => return Err(InputError::MissingDiskCount),
        ("d" | "difficulty", [count]) => Msg::DifficultyChanged(
            count
                .parse()
                .map_err(|_| InputError::BadDiskCount((*count).to_string()))?,
        ),
        ("i" | "info" | "?" | "help", []) => Msg::InfoOpened,
        ("c" | "close", []) => Msg::InfoClosed,
        ("h" | "hint", []) => Msg::HintRequested,
        ("x", []) => Msg::HintBannerDismissed { permanently: false },
        ("never", []) => Msg::HintBannerDismissed { permanently: true },
        ("s" | "state", []) => return Ok(Command::DumpState),
        ("q" | "quit" | "exit", []) => Msg::QuitRequested,
        (_, [to]) if is_number(first) => Msg::MoveRequested {
            from: tower(first)?,
            to: tower(to)?,
        },
        (_, []) => match parse_tower_gesture(first) {
            Some(gesture) => gesture?,
            None => return Err(InputError::Unknown(line.to_string())),
        },
        _ => return Err(InputError::Unknown(line.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

/// `2` taps a tower, `13` and `1>3` move between two.
fn parse_tower_gesture(word: &str) -> Option<Result<Msg, InputError>> {
    if let Some((from, to)) = word.split_once('>') {
        return Some(move_between(from, to));
    }
    if !is_number(word) {
        return None;
    }
    let msg = match word.len() {
        1 => tower(word).map(Msg::TowerTapped),
        2 => move_between(&word[..1], &word[1..]),
        _ => Err(InputError::BadTower(word.to_string())),
    };
    Some(msg)
}

fn move_between(from: &str, to: &str) -> Result<Msg, InputError> {
    Ok(Msg::MoveRequested {
        from: tower(from)?,
        to: tower(to)?,
    })
}

fn is_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Converts an on-screen number to a core tower index. Out-of-range numbers
/// pass through so the rules engine can reject them.
fn tower(word: &str) -> Result<TowerId, InputError> {
    word.trim()
        .parse::<TowerId>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .ok_or_else(|| InputError::BadTower(word.trim().to_string()))
}
