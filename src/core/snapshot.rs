//! Snapshot module - copy-out views for rendering and replay capture
//!
//! A renderer never borrows the live grid; it asks for a snapshot and
//! draws from that. Snapshots are plain value types sized for the
//! playable area, and `snapshot_into` refreshes a caller-owned buffer so
//! a render loop allocates once and reuses it every frame.

use crate::core::engine::CascadeEngine;
use crate::core::session::GameSession;
use crate::types::{Cell, Pos, GRID_SIZE, OFFSET_X, OFFSET_Y, SwapState};

/// One playable tile as the renderer sees it: kind plus screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileView {
    pub kind: Cell,
    /// Screen-space pixel x (board offset already applied)
    pub x: i32,
    /// Screen-space pixel y (board offset already applied)
    pub y: i32,
}

/// Frame view of the board: 8x8 tile views plus the swap-protocol state
/// a renderer highlights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub tiles: [[TileView; GRID_SIZE]; GRID_SIZE],
    pub selection: Option<Pos>,
    pub pending: Option<(Pos, Pos)>,
    pub moving: bool,
}

impl BoardSnapshot {
    pub fn new() -> Self {
        Self {
            tiles: [[TileView::default(); GRID_SIZE]; GRID_SIZE],
            selection: None,
            pending: None,
            moving: false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeEngine {
    /// Refresh a caller-owned snapshot buffer from the current state
    pub fn snapshot_into(&self, snap: &mut BoardSnapshot) {
        for row in 1..=GRID_SIZE as u8 {
            for col in 1..=GRID_SIZE as u8 {
                let tile = self.grid().tile(Pos::new(row, col));
                snap.tiles[usize::from(row) - 1][usize::from(col) - 1] = TileView {
                    kind: tile.kind,
                    x: tile.x + OFFSET_X,
                    y: tile.y + OFFSET_Y,
                };
            }
        }
        match self.swap_state() {
            SwapState::Idle => {
                snap.selection = None;
                snap.pending = None;
            }
            SwapState::FirstSelected(pos) => {
                snap.selection = Some(pos);
                snap.pending = None;
            }
            SwapState::Pending(a, b) => {
                snap.selection = None;
                snap.pending = Some((a, b));
            }
        }
        snap.moving = self.is_moving();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::new();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Frame view of a whole session: the board plus score and timer readouts
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub score: u32,
    pub time_remaining_s: f64,
    pub timer_speed: f64,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub fn new() -> Self {
        Self {
            board: BoardSnapshot::new(),
            score: 0,
            time_remaining_s: 0.0,
            timer_speed: 1.0,
            game_over: false,
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Refresh a caller-owned session snapshot from the current state
    pub fn snapshot_into(&self, snap: &mut SessionSnapshot) {
        self.engine().snapshot_into(&mut snap.board);
        snap.score = self.score();
        snap.time_remaining_s = self.timer().remaining_s();
        snap.timer_speed = self.timer().speed();
        snap.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::new();
        self.snapshot_into(&mut snap);
        snap
    }
}
