//! Tile colors and the pieces that circulate between bag, displays and boards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the wall and number of staging lines per player.
pub const BOARD_SIZE: usize = 5;

/// Number of distinct tile colors.
pub const TILE_COLORS: usize = 5;

/// Tile colors (order fixed; enumeration follows it)
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue = 0,
    Yellow = 1,
    Red = 2,
    Black = 3,
    White = 4,
}

pub const ALL_COLORS: [Color; TILE_COLORS] = [
    Color::Blue,
    Color::Yellow,
    Color::Red,
    Color::Black,
    Color::White,
];

impl Color {
    /// Convert from u8 index to Color
    pub fn from_index(idx: u8) -> Option<Color> {
        ALL_COLORS.get(idx as usize).copied()
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that can sit in the shared pool: a colored tile or the
/// first-player marker.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Piece {
    Tile(Color),
    FirstPlayerMarker,
}

impl Piece {
    /// The tile color, or `None` for the marker.
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Tile(c) => Some(c),
            Piece::FirstPlayerMarker => None,
        }
    }
}
