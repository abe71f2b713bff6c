//! Center pool ("shared pool"): leftover tiles plus, at most, the
//! first-player marker.

use crate::tile::{Color, Piece, ALL_COLORS};

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SharedPool {
    pieces: Vec<Piece>,
}

impl SharedPool {
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn has_marker(&self) -> bool {
        self.pieces.contains(&Piece::FirstPlayerMarker)
    }

    /// Whether any colored tile is present (the marker alone does not count).
    pub fn has_tiles(&self) -> bool {
        self.pieces.iter().any(|p| p.color().is_some())
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces
            .iter()
            .filter(|&&p| p == Piece::Tile(color))
            .count()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.pieces.contains(&Piece::Tile(color))
    }

    /// Distinct colors present, in `ALL_COLORS` order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        ALL_COLORS.into_iter().filter(|&c| self.contains(c))
    }

    /// Put the marker back for a new round unless it never left.
    pub(crate) fn seed_marker(&mut self) {
        if !self.has_marker() {
            self.pieces.push(Piece::FirstPlayerMarker);
        }
    }

    pub(crate) fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Color>) {
        self.pieces.extend(tiles.into_iter().map(Piece::Tile));
    }

    /// Remove every tile of `color`, plus the marker if present.
    /// Returns (tiles taken, whether the marker was taken).
    pub(crate) fn take(&mut self, color: Color) -> (u8, bool) {
        let before = self.pieces.len();
        let took_marker = self.has_marker();
        self.pieces
            .retain(|&p| p != Piece::Tile(color) && p != Piece::FirstPlayerMarker);
        let removed = (before - self.pieces.len()) as u8;
        (removed - took_marker as u8, took_marker)
    }
}
