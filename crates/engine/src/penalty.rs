//! Floor line ("penalty track"): a bounded counter of overflow tiles.

/// Slots on the floor line; further tiles still go to the discard but
/// are not counted.
pub const FLOOR_CAPACITY: usize = 7;

/// Floor penalties (fixed table)
pub const FLOOR_PENALTY: [i32; FLOOR_CAPACITY] = [-1, -1, -2, -2, -2, -3, -3];

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PenaltyTrack {
    count: u8,
}

impl PenaltyTrack {
    #[inline]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Record `n` more floor tiles, saturating at the track length.
    pub(crate) fn add(&mut self, n: u8) {
        self.count = self.count.saturating_add(n).min(FLOOR_CAPACITY as u8);
    }

    /// Reset to zero, returning the count that was scored.
    pub(crate) fn reset(&mut self) -> u8 {
        std::mem::take(&mut self.count)
    }
}

/// Cumulative penalty for `count` floor tiles under `table`.
pub fn floor_penalty(table: &[i32], count: u8) -> i32 {
    table.iter().take(count as usize).sum()
}
