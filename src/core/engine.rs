//! Cascade engine - swap protocol and the per-tick state transition
//!
//! Owns the grid, the RNG, and the swap state machine. One call to
//! [`CascadeEngine::tick`] runs match detection, the animation step, and
//! cascade resolution in that fixed order; the returned score delta is 0
//! until every slide has settled, so a cascade is committed and scored
//! exactly once. The engine never reads the wall clock and never blocks:
//! a pending swap resolves purely by inspecting the settled state on a
//! later tick.

use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::core::{animation, matcher, scoring};
use crate::types::{Pos, SwapState};

#[derive(Debug, Clone)]
pub struct CascadeEngine {
    grid: Grid,
    rng: SimpleRng,
    swap: SwapState,
    moving: bool,
    seed: u32,
}

impl CascadeEngine {
    /// Create an engine with a freshly seeded, match-free board
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::seeded(&mut rng);
        Self {
            grid,
            rng,
            swap: SwapState::Idle,
            moving: false,
            seed,
        }
    }

    /// Resume from a known board layout (scenario setups, replays);
    /// the seed only drives future refills
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            rng: SimpleRng::new(seed),
            swap: SwapState::Idle,
            moving: false,
            seed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn swap_state(&self) -> SwapState {
        self.swap
    }

    /// True if any tile was away from its resting position after the
    /// last tick (including displacements made by that tick's rollback
    /// or refill)
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Reseed the board and clear all transient state
    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Feed one discrete cell-select event into the swap protocol.
    ///
    /// Events are ignored entirely while a swap is pending or while any
    /// tile is mid-slide, so input cannot interleave with an unresolved
    /// cascade. Border selects clear the selection; a second select on
    /// the first cell deselects; a valid non-adjacent second select
    /// becomes the new first selection. An adjacent pair swaps
    /// optimistically and waits for the next settled tick to be judged.
    pub fn select(&mut self, pos: Pos) {
        if self.moving {
            return;
        }
        self.swap = match self.swap {
            SwapState::Idle => {
                if self.grid.contains(pos) {
                    SwapState::FirstSelected(pos)
                } else {
                    SwapState::Idle
                }
            }
            SwapState::FirstSelected(first) => {
                if !self.grid.contains(pos) || pos == first {
                    SwapState::Idle
                } else if first.is_adjacent(pos) {
                    self.grid.exchange(first, pos);
                    SwapState::Pending(first, pos)
                } else {
                    SwapState::FirstSelected(pos)
                }
            }
            pending @ SwapState::Pending(..) => pending,
        };
    }

    /// One synchronous state transition: detection, animation step,
    /// then resolution once settled. Returns the tick's score delta.
    ///
    /// With no new matches this is idempotent on the board: it returns 0
    /// and mutates nothing beyond the animation step.
    pub fn tick(&mut self) -> u32 {
        let focus = match self.swap {
            SwapState::Pending(a, b) => Some((a, b)),
            _ => None,
        };
        matcher::find_matches(&mut self.grid, focus);

        self.moving = animation::step(&mut self.grid);
        if self.moving {
            return 0;
        }

        let score = scoring::score_matched_runs(&self.grid);

        if let SwapState::Pending(a, b) = self.swap {
            if score == 0 {
                // Invalid move: the optimistic swap produced nothing,
                // exchange back and let the tiles slide home
                self.grid.exchange(a, b);
                self.moving = true;
            }
            self.swap = SwapState::Idle;
        }

        if score > 0 {
            self.grid.collapse_matched();
            self.grid.refill(&mut self.rng);
            // Resolution displaced tiles; keep input blocked until the
            // next tick confirms they have settled
            self.moving = true;
        }

        score
    }
}
