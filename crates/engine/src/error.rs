//! Rejections returned by `execute`. A rejected action never mutates state.

use thiserror::Error;

use crate::action::{PlayerId, Source};
use crate::state::Phase;
use crate::tile::Color;

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum IllegalAction {
    #[error("drafting is not possible in phase {0:?}")]
    WrongPhase(Phase),
    #[error("player {player} acted but it is player {current}'s turn")]
    NotPlayersTurn { player: PlayerId, current: PlayerId },
    #[error("supply {0} does not exist")]
    UnknownSupply(u8),
    #[error("{from} holds no {color} tiles")]
    ColorNotInSource { from: Source, color: Color },
    #[error("row {0} does not exist")]
    RowOutOfRange(u8),
    #[error("{color} is already on the wall in row {row}")]
    ColorAlreadyOnWall { row: u8, color: Color },
    #[error("row {row} holds {held}, cannot take {color}")]
    RowHoldsOtherColor { row: u8, held: Color, color: Color },
    #[error("row {0} is full")]
    RowFull(u8),
    #[error("cannot pass while tiles can be drafted")]
    PassWhileDraftsAvailable,
}
