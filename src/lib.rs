//! Deterministic match-3 simulation core.
//!
//! This crate contains the board rules, swap protocol, and cascade
//! resolution of a gem-swap game. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: same seed produces identical boards and refills
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: can run headless, in a terminal, or behind any renderer
//! - **Fast**: zero-allocation tick path on a fixed-size grid
//!
//! # Module structure
//!
//! - [`types`]: shared constants, gem kinds, coordinates, swap state
//! - [`core::grid`]: bordered 8x8 tile grid with seeding, swap, gravity, refill
//! - [`core::matcher`]: run-length match detection over rows and columns
//! - [`core::animation`]: fixed-step pixel animation and the settled gate
//! - [`core::scoring`]: run scoring with length bonus, score accumulation
//! - [`core::timer`]: countdown collaborator with multiplicative speed-up
//! - [`core::engine`]: swap protocol state machine and per-tick cascade
//! - [`core::session`]: one-call-per-frame wiring of engine, timer, score
//!
//! # Control flow
//!
//! The caller owns the frame loop and the clock. Each frame it forwards
//! discrete select events (already converted from pixels via
//! [`types::cell_from_pixel`]) and calls [`core::session::GameSession::update`]
//! with the elapsed time; rendering reads the board through
//! [`core::snapshot::BoardSnapshot`] only.

pub mod core;
pub mod types;
