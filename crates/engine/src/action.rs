//! Action representation

use std::fmt;

use crate::tile::Color;

/// Index into the players: 0..num_players-1
pub type PlayerId = u8;

/// Where drafted tiles come from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Source {
    /// Factory display, index 0..num_supplies-1
    Supply(u8),
    Pool,
}

/// Where drafted tiles go.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Destination {
    /// Staging line 0..=4
    Row(u8),
    Floor,
}

/// Take every tile of `color` from `source` and send it to `destination`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Draft {
    pub player: PlayerId,
    pub source: Source,
    pub color: Color,
    pub destination: Destination,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    Draft(Draft),
    /// No-op offered when nothing can be drafted (tiling or game over), so
    /// callers always have at least one action.
    Pass,
}

impl From<Draft> for Action {
    fn from(draft: Draft) -> Self {
        Action::Draft(draft)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Supply(i) => write!(f, "supply {i}"),
            Source::Pool => f.write_str("center pool"),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Row(r) => write!(f, "row {r}"),
            Destination::Floor => f.write_str("floor line"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Draft(d) => write!(
                f,
                "player {} takes {} from {} to {}",
                d.player, d.color, d.source, d.destination
            ),
            Action::Pass => f.write_str("pass"),
        }
    }
}
