//! Hanoi store: small-file persistence for settings that outlive a session.
mod store;

pub use store::{PersistError, StateStore, DEFAULT_STATE_DIR};
