//! Scoring module - run scoring with length bonus
//!
//! A minimum-length run is worth [`BASE_RUN_SCORE`] points and every
//! tile past three adds one point, the integer-exact equivalent of the
//! 10% length bonus `floor(10 * (1 + 0.1 * (len - 3)))`.
//!
//! The scoring pass walks the tagged board once per orientation and
//! claims each maximal run exactly once. The detector records run
//! orientation in separate tags, so a cell shared by a horizontal and a
//! vertical run contributes to both runs without either run being
//! fragmented or counted twice.

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::types::{Pos, BASE_RUN_SCORE, GRID_SIZE, GRID_TILES, MIN_RUN_LEN};

/// Upper bound on scored runs in one pass: every run claims at least
/// three cells in its orientation
pub const MAX_RUNS: usize = GRID_SIZE * GRID_SIZE;

/// One scored run (origin is its top-most / left-most tagged cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub origin: Pos,
    pub len: u8,
    pub horizontal: bool,
}

/// Points for a single run of the given length (0 below the minimum)
pub fn run_score(len: u8) -> u32 {
    if len < MIN_RUN_LEN {
        return 0;
    }
    BASE_RUN_SCORE + u32::from(len - MIN_RUN_LEN)
}

/// Collect every tagged run exactly once.
///
/// Scanning row-major, the first unclaimed cell of a horizontal run is
/// its left-most cell and the first unclaimed cell of a vertical run is
/// its top-most cell; claiming marks the run's remaining cells in the
/// matching orientation map so they are skipped.
pub fn collect_runs(grid: &Grid) -> ArrayVec<Run, MAX_RUNS> {
    let mut runs = ArrayVec::new();
    let mut claimed_h = [[false; GRID_TILES]; GRID_TILES];
    let mut claimed_v = [[false; GRID_TILES]; GRID_TILES];

    for row in 1..=GRID_SIZE {
        for col in 1..=GRID_SIZE {
            let tile = grid.tile(Pos::new(row as u8, col as u8));

            let h = tile.run_h;
            if h != 0 && !claimed_h[row][col] {
                for c in col..(col + h as usize).min(GRID_SIZE + 1) {
                    claimed_h[row][c] = true;
                }
                runs.push(Run {
                    origin: Pos::new(row as u8, col as u8),
                    len: h,
                    horizontal: true,
                });
            }

            let v = tile.run_v;
            if v != 0 && !claimed_v[row][col] {
                for r in row..(row + v as usize).min(GRID_SIZE + 1) {
                    claimed_v[r][col] = true;
                }
                runs.push(Run {
                    origin: Pos::new(row as u8, col as u8),
                    len: v,
                    horizontal: false,
                });
            }
        }
    }
    runs
}

/// Total score for the current tags, each maximal run counted once
pub fn score_matched_runs(grid: &Grid) -> u32 {
    collect_runs(grid).iter().map(|run| run_score(run.len)).sum()
}

/// Running score total (the score accumulator collaborator)
///
/// The engine reports a score delta per tick; this sums the deltas and
/// exposes the total for display and leaderboard submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    total: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, delta: u32) {
        self.total = self.total.saturating_add(delta);
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }
}
