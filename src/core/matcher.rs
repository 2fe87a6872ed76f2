//! Match detection - run-length scans over rows and columns
//!
//! Each pass resets every run tag, then writes the run length onto every
//! tile that sits in a maximal horizontal or vertical run of 3 or more
//! equal kinds. Sentinel border tiles never extend a run. Horizontal and
//! vertical runs use separate tags, so a cell where two runs cross
//! carries both lengths and the scoring pass never has to guess a run's
//! orientation.
//!
//! While a swap is pending only the rows and columns of the two swapped
//! cells can have changed, so the scan is restricted to those four lines;
//! cascades (no pending swap) rescan the whole board to catch matches
//! created by gravity refills.

use crate::core::grid::Grid;
use crate::types::{Pos, GRID_SIZE, MIN_RUN_LEN};

/// Reset every playable tile's run tags to unmatched
pub fn clear_tags(grid: &mut Grid) {
    for row in 1..=GRID_SIZE as u8 {
        for col in 1..=GRID_SIZE as u8 {
            let tile = grid.tile_mut(Pos::new(row, col));
            tile.run_h = 0;
            tile.run_v = 0;
        }
    }
}

/// Tag runs of >= 3 equal kinds in one row
pub fn mark_row(grid: &mut Grid, row: u8) {
    let mut start: usize = 1;
    let mut count: u8 = 1;
    let mut current = grid.kind_at(Pos::new(row, 1));

    for col in 2..=GRID_SIZE {
        let kind = grid.kind_at(Pos::new(row, col as u8));
        if kind == current && current.is_some() {
            count += 1;
        } else {
            if count >= MIN_RUN_LEN {
                tag_row_run(grid, row, start, count);
            }
            start = col;
            count = 1;
            current = kind;
        }
    }
    if count >= MIN_RUN_LEN {
        tag_row_run(grid, row, start, count);
    }
}

/// Tag runs of >= 3 equal kinds in one column
pub fn mark_col(grid: &mut Grid, col: u8) {
    let mut start: usize = 1;
    let mut count: u8 = 1;
    let mut current = grid.kind_at(Pos::new(1, col));

    for row in 2..=GRID_SIZE {
        let kind = grid.kind_at(Pos::new(row as u8, col));
        if kind == current && current.is_some() {
            count += 1;
        } else {
            if count >= MIN_RUN_LEN {
                tag_col_run(grid, col, start, count);
            }
            start = row;
            count = 1;
            current = kind;
        }
    }
    if count >= MIN_RUN_LEN {
        tag_col_run(grid, col, start, count);
    }
}

fn tag_row_run(grid: &mut Grid, row: u8, start: usize, len: u8) {
    for col in start..start + len as usize {
        grid.tile_mut(Pos::new(row, col as u8)).run_h = len;
    }
}

fn tag_col_run(grid: &mut Grid, col: u8, start: usize, len: u8) {
    for row in start..start + len as usize {
        grid.tile_mut(Pos::new(row as u8, col)).run_v = len;
    }
}

/// Full detection pass: reset all tags, then scan either the four lines
/// touched by a pending swap or the whole board.
pub fn find_matches(grid: &mut Grid, focus: Option<(Pos, Pos)>) {
    clear_tags(grid);
    match focus {
        Some((a, b)) => {
            mark_row(grid, a.row);
            mark_row(grid, b.row);
            mark_col(grid, a.col);
            mark_col(grid, b.col);
        }
        None => {
            for line in 1..=GRID_SIZE as u8 {
                mark_row(grid, line);
                mark_col(grid, line);
            }
        }
    }
}

/// True if any playable tile is currently tagged
pub fn any_tagged(grid: &Grid) -> bool {
    for row in 1..=GRID_SIZE as u8 {
        for col in 1..=GRID_SIZE as u8 {
            if grid.tile(Pos::new(row, col)).is_matched() {
                return true;
            }
        }
    }
    false
}
