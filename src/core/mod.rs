//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the board rules, state management, and the
//! per-tick cascade. It has zero dependencies on UI, networking, or I/O.

pub mod animation;
pub mod engine;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod tile;
pub mod timer;

// Re-export commonly used types
pub use engine::CascadeEngine;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use scoring::ScoreTally;
pub use session::GameSession;
pub use snapshot::{BoardSnapshot, SessionSnapshot, TileView};
pub use tile::Tile;
pub use timer::DifficultyTimer;
