//! Grid module - manages the gem board
//!
//! The board is an 8x8 playable area stored inside a 10x10 array whose
//! outer ring is a permanent sentinel border (no gem kind). The border
//! means scans and neighbor checks never need bounds special-casing:
//! a sentinel never equals a gem, so runs break at the edge naturally.
//!
//! Invariants:
//! - every playable cell holds exactly one gem tile
//! - a tile's stored `row`/`col` always equal its array indices

use crate::core::rng::SimpleRng;
use crate::core::tile::Tile;
use crate::types::{Cell, GemKind, GridError, Pos, GRID_SIZE, GRID_TILES, TILE_SIZE};

/// The game board - playable 8x8 grid with sentinel border
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    tiles: [[Tile; GRID_TILES]; GRID_TILES],
}

impl Grid {
    /// Create a board of sentinel tiles only (no gems seeded yet)
    pub fn new() -> Self {
        let mut tiles = [[Tile::border(0, 0); GRID_TILES]; GRID_TILES];
        for (row, row_tiles) in tiles.iter_mut().enumerate() {
            for (col, tile) in row_tiles.iter_mut().enumerate() {
                *tile = Tile::border(row as u8, col as u8);
            }
        }
        Self { tiles }
    }

    /// Create a board and seed the playable area match-free
    pub fn seeded(rng: &mut SimpleRng) -> Self {
        let mut grid = Self::new();
        grid.seed(rng);
        grid
    }

    /// Fill every playable cell with a uniform random kind, re-drawing
    /// whenever a candidate would complete a run of 3 with the two cells
    /// to its left or the two cells above it (later cells are not placed
    /// yet, so scanning left and up is sufficient). The resulting board
    /// never starts with a match.
    pub fn seed(&mut self, rng: &mut SimpleRng) {
        for row in 1..=GRID_SIZE {
            for col in 1..=GRID_SIZE {
                let kind = loop {
                    let candidate = rng.next_gem();
                    if !self.would_open_run(row, col, candidate) {
                        break candidate;
                    }
                };
                self.tiles[row][col] = Tile::gem(row as u8, col as u8, kind);
            }
        }
    }

    fn would_open_run(&self, row: usize, col: usize, kind: GemKind) -> bool {
        let k = Some(kind);
        let in_row = col >= 2
            && self.tiles[row][col - 1].kind == k
            && self.tiles[row][col - 2].kind == k;
        let in_col = row >= 2
            && self.tiles[row - 1][col].kind == k
            && self.tiles[row - 2][col].kind == k;
        in_row || in_col
    }

    /// True if the position is inside the playable area (border excluded)
    pub fn contains(&self, pos: Pos) -> bool {
        let row = pos.row as usize;
        let col = pos.col as usize;
        (1..=GRID_SIZE).contains(&row) && (1..=GRID_SIZE).contains(&col)
    }

    /// Tile at a position (including border tiles)
    pub fn tile(&self, pos: Pos) -> &Tile {
        &self.tiles[pos.row as usize][pos.col as usize]
    }

    pub(crate) fn tile_mut(&mut self, pos: Pos) -> &mut Tile {
        &mut self.tiles[pos.row as usize][pos.col as usize]
    }

    /// Gem kind at a position (`None` on the border)
    pub fn kind_at(&self, pos: Pos) -> Cell {
        self.tile(pos).kind
    }

    /// Overwrite the kind of a playable cell.
    ///
    /// Rejects border and out-of-range cells: a sentinel must never
    /// become a gem and a gem must never land outside the playable area.
    pub fn set_kind(&mut self, pos: Pos, kind: GemKind) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        self.tile_mut(pos).kind = Some(kind);
        Ok(())
    }

    /// Exchange the tiles of two playable cells.
    ///
    /// The tiles trade array slots and logical `row`/`col`; their pixel
    /// positions stay behind, so each tile animates toward the other's
    /// former cell over the following ticks.
    pub fn swap(&mut self, a: Pos, b: Pos) -> Result<(), GridError> {
        for pos in [a, b] {
            if !self.contains(pos) {
                return Err(GridError::OutOfBounds {
                    row: pos.row,
                    col: pos.col,
                });
            }
        }
        self.exchange(a, b);
        Ok(())
    }

    /// Slot exchange without the playable-area check; internal callers
    /// only pass positions validated at selection time.
    pub(crate) fn exchange(&mut self, a: Pos, b: Pos) {
        let mut ta = *self.tile(a);
        let mut tb = *self.tile(b);
        (ta.row, tb.row) = (tb.row, ta.row);
        (ta.col, tb.col) = (tb.col, ta.col);
        self.tiles[ta.row as usize][ta.col as usize] = ta;
        self.tiles[tb.row as usize][tb.col as usize] = tb;
    }

    /// Per-column gravity: walking each column bottom-to-top, every
    /// matched cell trades places with the nearest unmatched tile above
    /// it. Matched tiles bubble to the top of their column; unmatched
    /// tiles keep their relative order. Tiles never change column.
    pub fn collapse_matched(&mut self) {
        for col in 1..=GRID_SIZE {
            for row in (1..=GRID_SIZE).rev() {
                if !self.tiles[row][col].is_matched() {
                    continue;
                }
                for above in (1..row).rev() {
                    if !self.tiles[above][col].is_matched() {
                        self.exchange(
                            Pos::new(above as u8, col as u8),
                            Pos::new(row as u8, col as u8),
                        );
                        break;
                    }
                }
            }
        }
    }

    /// Reseed every still-matched cell with a fresh random kind and park
    /// its pixel y above the board, stacked by how many refills the
    /// column received, so the new gems visibly fall in. Clears the run
    /// tags it consumes.
    pub fn refill(&mut self, rng: &mut SimpleRng) {
        for col in 1..=GRID_SIZE {
            let mut stacked: i32 = 0;
            for row in (1..=GRID_SIZE).rev() {
                let tile = &mut self.tiles[row][col];
                if tile.is_matched() {
                    tile.kind = Some(rng.next_gem());
                    tile.y = -TILE_SIZE * stacked;
                    tile.run_h = 0;
                    tile.run_v = 0;
                    stacked += 1;
                }
            }
        }
    }

    /// Number of gem tiles currently in a playable column
    pub fn column_gem_count(&self, col: u8) -> usize {
        (1..=GRID_SIZE)
            .filter(|&row| self.tiles[row][col as usize].is_gem())
            .count()
    }

    /// Kind-at-cell mapping of the playable area, `[row-1][col-1]` indexed
    pub fn kind_grid(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        let mut kinds = [[None; GRID_SIZE]; GRID_SIZE];
        for row in 1..=GRID_SIZE {
            for col in 1..=GRID_SIZE {
                kinds[row - 1][col - 1] = self.tiles[row][col].kind;
            }
        }
        kinds
    }

    /// Build a board from an explicit kind layout (resting pixel
    /// positions, no run tags); used to set up known scenarios
    pub fn from_kinds(kinds: [[GemKind; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (i, row_kinds) in kinds.iter().enumerate() {
            for (j, kind) in row_kinds.iter().enumerate() {
                let (row, col) = (i + 1, j + 1);
                grid.tiles[row][col] = Tile::gem(row as u8, col as u8, *kind);
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
