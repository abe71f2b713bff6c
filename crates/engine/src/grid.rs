//! The personal 5x5 wall ("scoring grid") and its fixed color layout.

use crate::tile::{Color, ALL_COLORS, BOARD_SIZE, TILE_COLORS};

/// Wall pattern: WALL_PATTERN[row][col] = Color at that position.
/// Each row is the one above it shifted right by one cell.
pub const WALL_PATTERN: [[Color; BOARD_SIZE]; BOARD_SIZE] = [
    // row 0
    [
        Color::Blue,
        Color::Yellow,
        Color::Red,
        Color::Black,
        Color::White,
    ],
    // row 1
    [
        Color::White,
        Color::Blue,
        Color::Yellow,
        Color::Red,
        Color::Black,
    ],
    // row 2
    [
        Color::Black,
        Color::White,
        Color::Blue,
        Color::Yellow,
        Color::Red,
    ],
    // row 3
    [
        Color::Red,
        Color::Black,
        Color::White,
        Color::Blue,
        Color::Yellow,
    ],
    // row 4
    [
        Color::Yellow,
        Color::Red,
        Color::Black,
        Color::White,
        Color::Blue,
    ],
];

/// Destination column lookup: WALL_DEST_COL[row][color_index] => col
pub const WALL_DEST_COL: [[u8; TILE_COLORS]; BOARD_SIZE] = [
    // row 0: Blue=0, Yellow=1, Red=2, Black=3, White=4
    [0, 1, 2, 3, 4],
    // row 1: White=0, Blue=1, Yellow=2, Red=3, Black=4
    [1, 2, 3, 4, 0],
    // row 2: Black=0, White=1, Blue=2, Yellow=3, Red=4
    [2, 3, 4, 0, 1],
    // row 3: Red=0, Black=1, White=2, Blue=3, Yellow=4
    [3, 4, 0, 1, 2],
    // row 4: Yellow=0, Red=1, Black=2, White=3, Blue=4
    [4, 0, 1, 2, 3],
];

/// Column that `color` occupies in `row`.
#[inline]
pub fn column_for(row: usize, color: Color) -> usize {
    WALL_DEST_COL[row][color.index()] as usize
}

/// Which wall cells hold a tile. Cells are only ever filled, never cleared.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScoringGrid {
    filled: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl ScoringGrid {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.filled[row][col]
    }

    /// Whether `color` is already on the wall in `row`.
    #[inline]
    pub fn has_color(&self, row: usize, color: Color) -> bool {
        self.filled[row][column_for(row, color)]
    }

    /// Fill the cell for `color` in `row`, returning its column.
    /// Returns `None` (and leaves the grid untouched) if the cell is taken.
    pub(crate) fn place(&mut self, row: usize, color: Color) -> Option<usize> {
        let col = column_for(row, color);
        if self.filled[row][col] {
            return None;
        }
        self.filled[row][col] = true;
        Some(col)
    }

    /// Color of the tile at (row, col), if any.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Color> {
        self.filled[row][col].then(|| WALL_PATTERN[row][col])
    }

    pub fn is_row_complete(&self, row: usize) -> bool {
        self.filled[row].iter().all(|&f| f)
    }

    pub fn completed_rows(&self) -> u32 {
        (0..BOARD_SIZE).filter(|&r| self.is_row_complete(r)).count() as u32
    }

    pub fn completed_columns(&self) -> u32 {
        (0..BOARD_SIZE)
            .filter(|&c| (0..BOARD_SIZE).all(|r| self.filled[r][c]))
            .count() as u32
    }

    pub fn completed_color_sets(&self) -> u32 {
        ALL_COLORS
            .iter()
            .filter(|&&color| self.color_count(color) == BOARD_SIZE)
            .count() as u32
    }

    pub fn has_complete_row(&self) -> bool {
        (0..BOARD_SIZE).any(|r| self.is_row_complete(r))
    }

    /// Number of tiles of `color` on the wall.
    pub fn color_count(&self, color: Color) -> usize {
        (0..BOARD_SIZE)
            .filter(|&r| self.has_color(r, color))
            .count()
    }

    pub fn filled_count(&self) -> usize {
        self.filled.iter().flatten().filter(|&&f| f).count()
    }
}
