//! Tile module - the per-cell value object
//!
//! A tile carries its gem kind, its logical grid coordinates, a pixel
//! position used only for animation, and transient run tags written by
//! the match detector. Tiles are mutated in place; a "removed" tile is
//! simply given a fresh kind during refill.

use crate::types::{Cell, GemKind, TILE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Gem kind, or `None` for the sentinel border
    pub kind: Cell,
    /// Logical row index into the grid array
    pub row: u8,
    /// Logical column index into the grid array
    pub col: u8,
    /// Pixel x position (animation space)
    pub x: i32,
    /// Pixel y position (animation space)
    pub y: i32,
    /// Length of the horizontal run this tile belongs to (0 = none);
    /// recomputed every tick, never carried across ticks
    pub run_h: u8,
    /// Length of the vertical run this tile belongs to (0 = none);
    /// a cell at a run crossing carries both tags
    pub run_v: u8,
}

impl Tile {
    /// Gem tile resting at its cell's pixel position
    pub fn gem(row: u8, col: u8, kind: GemKind) -> Self {
        Self {
            kind: Some(kind),
            row,
            col,
            x: i32::from(col) * TILE_SIZE,
            y: i32::from(row) * TILE_SIZE,
            run_h: 0,
            run_v: 0,
        }
    }

    /// Sentinel border tile; never rendered, never matched
    pub fn border(row: u8, col: u8) -> Self {
        Self {
            kind: None,
            row,
            col,
            x: i32::from(col) * TILE_SIZE,
            y: i32::from(row) * TILE_SIZE,
            run_h: 0,
            run_v: 0,
        }
    }

    pub fn is_gem(&self) -> bool {
        self.kind.is_some()
    }

    /// True if the tile sits in at least one detected run
    pub fn is_matched(&self) -> bool {
        self.run_h != 0 || self.run_v != 0
    }

    /// Pixel x the tile slides toward
    pub fn target_x(&self) -> i32 {
        i32::from(self.col) * TILE_SIZE
    }

    /// Pixel y the tile slides toward
    pub fn target_y(&self) -> i32 {
        i32::from(self.row) * TILE_SIZE
    }

    /// Advance the pixel position by `steps` unit sub-steps, one pixel
    /// per axis per sub-step, sign-directed. Returns true if the tile is
    /// still away from its target afterwards.
    pub fn step_toward_target(&mut self, steps: u32) -> bool {
        for _ in 0..steps {
            let dx = self.x - self.target_x();
            let dy = self.y - self.target_y();
            if dx != 0 {
                self.x -= dx.signum();
            }
            if dy != 0 {
                self.y -= dy.signum();
            }
        }
        self.x != self.target_x() || self.y != self.target_y()
    }
}
