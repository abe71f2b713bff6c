//! Staging lines ("pattern lines"): five single-color rows of capacity 1..=5.

use crate::tile::Color;

/// One staging row. `color` is `None` exactly when the row is empty.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StagingLine {
    capacity: u8,
    color: Option<Color>,
    len: u8,
}

impl StagingLine {
    /// An empty line for `row` (capacity `row + 1`).
    pub fn for_row(row: usize) -> Self {
        Self {
            capacity: row as u8 + 1,
            color: None,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn len(&self) -> u8 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Free slots left in the line.
    #[inline]
    pub fn free(&self) -> u8 {
        self.capacity - self.len
    }

    /// Homogeneity and capacity check only; the wall constraint lives with
    /// the caller, which knows the player's grid.
    pub fn accepts(&self, color: Color) -> bool {
        match self.color {
            None => true,
            Some(held) => held == color && !self.is_full(),
        }
    }

    /// Add `count` tiles of `color`, returning how many did not fit.
    pub(crate) fn fill(&mut self, color: Color, count: u8) -> u8 {
        debug_assert!(self.accepts(color), "line cannot take {color:?}");
        let placed = count.min(self.free());
        if placed > 0 {
            self.color = Some(color);
            self.len += placed;
        }
        count - placed
    }

    /// Empty the line, returning what it held.
    pub(crate) fn clear(&mut self) -> Option<(Color, u8)> {
        let held = self.color.take().map(|c| (c, self.len));
        self.len = 0;
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_reports_overflow() {
        let mut line = StagingLine::for_row(1);
        assert_eq!(line.fill(Color::Red, 1), 0);
        assert_eq!(line.len(), 1);
        assert_eq!(line.fill(Color::Red, 3), 2);
        assert!(line.is_full());
        assert_eq!(line.color(), Some(Color::Red));
    }

    #[test]
    fn test_accepts_homogeneity() {
        let mut line = StagingLine::for_row(3);
        assert!(line.accepts(Color::Blue));
        line.fill(Color::Blue, 2);
        assert!(line.accepts(Color::Blue));
        assert!(!line.accepts(Color::Black));
        line.fill(Color::Blue, 2);
        assert!(!line.accepts(Color::Blue), "full line accepts nothing");
    }

    #[test]
    fn test_clear_resets_color() {
        let mut line = StagingLine::for_row(0);
        line.fill(Color::White, 1);
        assert_eq!(line.clear(), Some((Color::White, 1)));
        assert!(line.is_empty());
        assert_eq!(line.color(), None);
        assert_eq!(line.clear(), None);
    }
}
