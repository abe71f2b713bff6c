//! Factory displays ("supplies"): `2N + 1` shared four-tile displays.

use rand::Rng;

use crate::reservoir::TileReservoir;
use crate::tile::{Color, ALL_COLORS};

/// Tiles per display.
pub const SUPPLY_CAPACITY: usize = 4;

/// Number of displays for a given player count.
pub const fn supply_count(num_players: u8) -> usize {
    2 * num_players as usize + 1
}

/// A single factory display.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Supply {
    cells: [Option<Color>; SUPPLY_CAPACITY],
}

impl Supply {
    pub fn from_tiles(tiles: &[Color]) -> Self {
        let mut supply = Supply::default();
        for (cell, &color) in supply.cells.iter_mut().zip(tiles) {
            *cell = Some(color);
        }
        supply
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.tiles().count()
    }

    pub fn tiles(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn count(&self, color: Color) -> usize {
        self.tiles().filter(|&c| c == color).count()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.tiles().any(|c| c == color)
    }

    /// Distinct colors present, in `ALL_COLORS` order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        ALL_COLORS.into_iter().filter(|&c| self.contains(c))
    }

    /// Refill every empty cell from the reservoir. Returns the number of
    /// tiles drawn, which is short only when the reservoir runs dry.
    pub(crate) fn refill<R: Rng + ?Sized>(
        &mut self,
        reservoir: &mut TileReservoir,
        rng: &mut R,
    ) -> usize {
        let mut drawn = 0;
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            match reservoir.draw(rng) {
                Some(color) => {
                    *cell = Some(color);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Empty the display: returns the number of `color` tiles taken and the
    /// leftover tiles of other colors (bound for the shared pool).
    pub(crate) fn take(&mut self, color: Color) -> (u8, Vec<Color>) {
        let mut taken = 0;
        let mut rest = Vec::new();
        for tile in self.cells.iter_mut().filter_map(Option::take) {
            if tile == color {
                taken += 1;
            } else {
                rest.push(tile);
            }
        }
        (taken, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_supply_count_for_players() {
        assert_eq!(supply_count(2), 5);
        assert_eq!(supply_count(3), 7);
        assert_eq!(supply_count(4), 9);
    }

    #[test]
    fn test_take_splits_color_from_rest() {
        let mut supply =
            Supply::from_tiles(&[Color::Red, Color::Blue, Color::Red, Color::Black]);
        assert_eq!(supply.colors().collect::<Vec<_>>(), vec![Color::Blue, Color::Red, Color::Black]);

        let (taken, rest) = supply.take(Color::Red);
        assert_eq!(taken, 2);
        assert_eq!(rest, vec![Color::Blue, Color::Black]);
        assert!(supply.is_empty());
    }

    #[test]
    fn test_refill_partial_when_reservoir_runs_dry() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut reservoir = TileReservoir::from_parts(vec![Color::Yellow, Color::Blue], Vec::new());
        let mut supply = Supply::default();
        assert_eq!(supply.refill(&mut reservoir, &mut rng), 2);
        assert_eq!(supply.len(), 2);
        assert!(reservoir.is_exhausted());
    }
}
