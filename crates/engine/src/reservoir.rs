//! Tile bag and discard ("lid"), with reshuffle-on-exhaustion.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::tile::{Color, ALL_COLORS};

/// Draw bag plus discard pile. The bag is kept in draw order (already
/// shuffled); the discard is face-up and unordered.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TileReservoir {
    bag: Vec<Color>,
    discard: Vec<Color>,
}

impl TileReservoir {
    /// A full, shuffled bag with `tiles_per_color` tiles of every color.
    pub fn new<R: Rng + ?Sized>(tiles_per_color: u16, rng: &mut R) -> Self {
        let mut bag = Vec::with_capacity(tiles_per_color as usize * ALL_COLORS.len());
        for color in ALL_COLORS {
            bag.extend(std::iter::repeat(color).take(tiles_per_color as usize));
        }
        bag.shuffle(rng);
        Self {
            bag,
            discard: Vec::new(),
        }
    }

    /// Build a reservoir with explicit contents (bag in draw order, last
    /// element drawn first).
    pub fn from_parts(bag: Vec<Color>, discard: Vec<Color>) -> Self {
        Self { bag, discard }
    }

    /// Draw a single tile, pouring the discard back into the bag and
    /// reshuffling if the bag is empty. `None` only when both are empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Color> {
        if self.bag.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            trace!(tiles = self.discard.len(), "reshuffling discard into bag");
            self.bag.append(&mut self.discard);
            self.bag.shuffle(rng);
        }
        self.bag.pop()
    }

    pub(crate) fn discard(&mut self, color: Color, count: usize) {
        self.discard.extend(std::iter::repeat(color).take(count));
    }

    /// Re-order the hidden bag so its draw order carries no information.
    pub(crate) fn redact<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bag.shuffle(rng);
    }

    /// True when no tile can be drawn any more.
    pub fn is_exhausted(&self) -> bool {
        self.bag.is_empty() && self.discard.is_empty()
    }

    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    pub fn bag_count(&self, color: Color) -> usize {
        self.bag.iter().filter(|&&c| c == color).count()
    }

    pub fn discard_count(&self, color: Color) -> usize {
        self.discard.iter().filter(|&&c| c == color).count()
    }
}
