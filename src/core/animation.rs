//! Animation clock - fixed-step pixel movement toward logical cells
//!
//! Every tick each tile slides up to [`ANIM_STEPS_PER_TICK`] pixels per
//! axis toward `(col * TILE_SIZE, row * TILE_SIZE)`. The board-wide
//! moving flag is the OR over all tiles and gates match resolution: a
//! cascade is only committed once every slide has settled.

use crate::core::grid::Grid;
use crate::types::{Pos, ANIM_STEPS_PER_TICK, GRID_SIZE};

/// Advance every playable tile by one tick's worth of sub-steps.
/// Returns true if any tile is still away from its target afterwards.
pub fn step(grid: &mut Grid) -> bool {
    let mut moving = false;
    for row in 1..=GRID_SIZE as u8 {
        for col in 1..=GRID_SIZE as u8 {
            if grid
                .tile_mut(Pos::new(row, col))
                .step_toward_target(ANIM_STEPS_PER_TICK)
            {
                moving = true;
            }
        }
    }
    moving
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SimpleRng;
    use crate::types::TILE_SIZE;

    #[test]
    fn test_settled_board_reports_not_moving() {
        let mut rng = SimpleRng::new(5);
        let mut grid = Grid::seeded(&mut rng);
        assert!(!step(&mut grid));
    }

    #[test]
    fn test_swapped_tiles_slide_until_settled() {
        let mut rng = SimpleRng::new(5);
        let mut grid = Grid::seeded(&mut rng);
        grid.swap(Pos::new(4, 4), Pos::new(4, 5)).unwrap();

        // One tile width apart, 5 px per tick
        let mut ticks = 0;
        while step(&mut grid) {
            ticks += 1;
            assert!(ticks < 100, "animation must terminate");
        }
        // ceil(54 / 5) ticks minus the final settled call
        assert_eq!(ticks + 1, (TILE_SIZE as u32).div_ceil(ANIM_STEPS_PER_TICK));

        let tile = grid.tile(Pos::new(4, 4));
        assert_eq!(tile.x, tile.target_x());
        assert_eq!(tile.y, tile.target_y());
    }

    #[test]
    fn test_single_offset_tile_flags_whole_board() {
        let mut rng = SimpleRng::new(5);
        let mut grid = Grid::seeded(&mut rng);
        grid.tile_mut(Pos::new(1, 1)).y -= 2 * TILE_SIZE;
        assert!(step(&mut grid));
    }
}
