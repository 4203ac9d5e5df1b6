use thiserror::Error;

use crate::TowerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("disk count {requested} is outside the supported range {min}..={max}")]
    DiskCountOutOfRange { requested: u8, min: u8, max: u8 },
}

/// Why a move or selection was not applied.
///
/// Rejections are an ordinary outcome of play, not faults: callers of
/// [`crate::TowerOfHanoi::move_disk`] only see `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("tower {index} does not exist")]
    UnknownTower { index: usize },
    #[error("the puzzle is already solved")]
    AlreadySolved,
    #[error("tower {tower} has no disk to move")]
    EmptySource { tower: TowerId },
    #[error("disk {disk} is already on tower {tower}")]
    SameTower { tower: TowerId, disk: u8 },
    #[error("disk {disk} cannot rest on disk {onto}")]
    OntoSmallerDisk { disk: u8, onto: u8 },
}
