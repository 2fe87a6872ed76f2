//! Core types shared across the crate
//! This module contains pure data types and tuning constants with no
//! external dependencies beyond the error derive.

use thiserror::Error;

/// Playable board dimension (the board is GRID_SIZE x GRID_SIZE)
pub const GRID_SIZE: usize = 8;

/// Storage dimension including the one-cell sentinel border on each side
pub const GRID_TILES: usize = GRID_SIZE + 2;

/// Number of distinct gem kinds
pub const GEM_KIND_COUNT: usize = 7;

/// Edge length of one tile in pixels (animation space)
pub const TILE_SIZE: i32 = 54;

/// Pixel offset of the playable area inside the window
pub const OFFSET_X: i32 = 65;
pub const OFFSET_Y: i32 = 60;

/// Animation sub-steps per tick (at most one pixel per axis per sub-step)
pub const ANIM_STEPS_PER_TICK: u32 = 5;

/// Minimum run length that counts as a match
pub const MIN_RUN_LEN: u8 = 3;

/// Base score for a minimum-length run; each extra tile adds one point,
/// which is the integer-exact form of `floor(10 * (1 + 0.1 * (len - 3)))`
pub const BASE_RUN_SCORE: u32 = 10;

/// Difficulty timer tuning (seconds)
pub const TIMER_INITIAL_S: f64 = 20.0;
pub const TIMER_BONUS_PER_MATCH_S: f64 = 2.0;
pub const TIMER_SPEED_UP_INTERVAL_S: f64 = 5.0;
pub const TIMER_SPEED_UP_FACTOR: f64 = 1.1;

/// Gem kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemKind {
    Ruby,
    Amber,
    Topaz,
    Emerald,
    Sapphire,
    Amethyst,
    Quartz,
}

impl GemKind {
    pub const ALL: [Self; GEM_KIND_COUNT] = [
        Self::Ruby,
        Self::Amber,
        Self::Topaz,
        Self::Emerald,
        Self::Sapphire,
        Self::Amethyst,
        Self::Quartz,
    ];

    /// Kind for a numeric index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Numeric index of this kind (0-based, stable)
    pub fn index(&self) -> usize {
        match self {
            Self::Ruby => 0,
            Self::Amber => 1,
            Self::Topaz => 2,
            Self::Emerald => 3,
            Self::Sapphire => 4,
            Self::Amethyst => 5,
            Self::Quartz => 6,
        }
    }
}

/// Cell content (None = sentinel border, never rendered or matched)
pub type Cell = Option<GemKind>;

/// Grid coordinate (row 0 and GRID_SIZE+1 are border rows, same for columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True if the two positions are orthogonally adjacent
    /// (Manhattan distance exactly 1, diagonals excluded)
    pub fn is_adjacent(&self, other: Pos) -> bool {
        let dr = (i16::from(self.row) - i16::from(other.row)).abs();
        let dc = (i16::from(self.col) - i16::from(other.col)).abs();
        dr + dc == 1
    }
}

/// Swap protocol state
///
/// Replaces the scattered click-count / swap-flag fields of a typical
/// board object with a single tagged state, so invalid combinations
/// (e.g. a pending swap without two cells) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapState {
    /// No selection in progress
    Idle,
    /// One cell selected, awaiting a second select
    FirstSelected(Pos),
    /// Two cells optimistically swapped, awaiting settled animation
    Pending(Pos, Pos),
}

/// Contract violation on a grid mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the playable area")]
    OutOfBounds { row: u8, col: u8 },
}

/// Convert a window pixel coordinate to a playable cell coordinate.
///
/// Returns `None` for pixels outside the playable area. Presentation
/// layers call this before feeding select events into the engine.
pub fn cell_from_pixel(pixel_x: i32, pixel_y: i32) -> Option<Pos> {
    let x = pixel_x - OFFSET_X;
    let y = pixel_y - OFFSET_Y;
    if x < 0 || y < 0 {
        return None;
    }
    let col = x / TILE_SIZE + 1;
    let row = y / TILE_SIZE + 1;
    if row > GRID_SIZE as i32 || col > GRID_SIZE as i32 {
        return None;
    }
    Some(Pos::new(row as u8, col as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gem_kind_index_roundtrip() {
        for (i, kind) in GemKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(GemKind::from_index(i), Some(*kind));
        }
        assert_eq!(GemKind::from_index(GEM_KIND_COUNT), None);
    }

    #[test]
    fn test_adjacency() {
        let p = Pos::new(4, 4);
        assert!(p.is_adjacent(Pos::new(3, 4)));
        assert!(p.is_adjacent(Pos::new(5, 4)));
        assert!(p.is_adjacent(Pos::new(4, 3)));
        assert!(p.is_adjacent(Pos::new(4, 5)));

        // Same cell and diagonals are not adjacent
        assert!(!p.is_adjacent(Pos::new(4, 4)));
        assert!(!p.is_adjacent(Pos::new(3, 3)));
        assert!(!p.is_adjacent(Pos::new(5, 5)));
        assert!(!p.is_adjacent(Pos::new(4, 6)));
    }

    #[test]
    fn test_cell_from_pixel_maps_playable_area() {
        // Top-left pixel of the playable area is cell (1, 1)
        assert_eq!(cell_from_pixel(OFFSET_X, OFFSET_Y), Some(Pos::new(1, 1)));
        // Last pixel of the first tile is still (1, 1)
        assert_eq!(
            cell_from_pixel(OFFSET_X + TILE_SIZE - 1, OFFSET_Y + TILE_SIZE - 1),
            Some(Pos::new(1, 1))
        );
        // One tile over on each axis
        assert_eq!(
            cell_from_pixel(OFFSET_X + TILE_SIZE, OFFSET_Y),
            Some(Pos::new(1, 2))
        );
        assert_eq!(
            cell_from_pixel(OFFSET_X, OFFSET_Y + TILE_SIZE),
            Some(Pos::new(2, 1))
        );
        // Bottom-right corner cell
        assert_eq!(
            cell_from_pixel(
                OFFSET_X + TILE_SIZE * (GRID_SIZE as i32) - 1,
                OFFSET_Y + TILE_SIZE * (GRID_SIZE as i32) - 1
            ),
            Some(Pos::new(GRID_SIZE as u8, GRID_SIZE as u8))
        );
    }

    #[test]
    fn test_cell_from_pixel_rejects_outside() {
        assert_eq!(cell_from_pixel(OFFSET_X - 1, OFFSET_Y), None);
        assert_eq!(cell_from_pixel(OFFSET_X, OFFSET_Y - 1), None);
        assert_eq!(cell_from_pixel(-10, -10), None);
        assert_eq!(
            cell_from_pixel(OFFSET_X + TILE_SIZE * (GRID_SIZE as i32), OFFSET_Y),
            None
        );
        assert_eq!(
            cell_from_pixel(OFFSET_X, OFFSET_Y + TILE_SIZE * (GRID_SIZE as i32)),
            None
        );
    }

    #[test]
    fn test_run_score_constant_matches_scaled_formula() {
        // BASE + (len - 3) must equal floor(10 * (1 + 0.1 * (len - 3)))
        for len in 3..=8u32 {
            let scaled = (10.0 * (1.0 + 0.1 * f64::from(len - 3))).floor() as u32;
            assert_eq!(BASE_RUN_SCORE + (len - 3), scaled);
        }
    }
}
