use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;

use crate::GameState;

/// Receives a notification after every change to a game.
///
/// The state passed in is already fully updated, so observers never see a
/// half-applied move.
pub trait StateObserver {
    fn state_changed(&mut self, state: &GameState);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameState),
{
    fn state_changed(&mut self, state: &GameState) {
        self(state)
    }
}

/// Forwards a snapshot of every change over a channel.
impl StateObserver for mpsc::Sender<GameState> {
    fn state_changed(&mut self, state: &GameState) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.send(state.clone());
    }
}

/// Shared revision counter bumped on every change notification.
///
/// Clones share the same counter, so one clone can be subscribed to a game
/// while another is polled to decide whether a redraw is due.
#[derive(Debug, Clone, Default)]
pub struct ChangeCounter(Rc<Cell<u64>>);

impl ChangeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revision(&self) -> u64 {
        self.0.get()
    }
}

impl StateObserver for ChangeCounter {
    fn state_changed(&mut self, _state: &GameState) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}
