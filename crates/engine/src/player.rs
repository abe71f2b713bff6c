//! Per-player board: staging lines, wall, floor line and running score.

use crate::grid::ScoringGrid;
use crate::penalty::PenaltyTrack;
use crate::staging::StagingLine;
use crate::tile::BOARD_SIZE;

/// Complete state for one player
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PlayerBoard {
    pub(crate) lines: [StagingLine; BOARD_SIZE],
    pub(crate) grid: ScoringGrid,
    pub(crate) penalty: PenaltyTrack,
    pub(crate) score: i32,
}

impl Default for PlayerBoard {
    fn default() -> Self {
        PlayerBoard {
            lines: std::array::from_fn(StagingLine::for_row),
            grid: ScoringGrid::new(),
            penalty: PenaltyTrack::default(),
            score: 0,
        }
    }
}

impl PlayerBoard {
    pub fn lines(&self) -> &[StagingLine; BOARD_SIZE] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> &StagingLine {
        &self.lines[row]
    }

    pub fn grid(&self) -> &ScoringGrid {
        &self.grid
    }

    pub fn penalty(&self) -> &PenaltyTrack {
        &self.penalty
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Add `delta` to the score, flooring at zero unless negatives are allowed.
    pub(crate) fn add_points(&mut self, delta: i32, allow_negative: bool) {
        self.score += delta;
        if !allow_negative {
            self.score = self.score.max(0);
        }
    }
}
