//! Difficulty timer - countdown collaborator
//!
//! Consumes `(delta_time, matched)` once per tick. The countdown drains
//! at a speed that multiplies by [`TIMER_SPEED_UP_FACTOR`] every
//! [`TIMER_SPEED_UP_INTERVAL_S`] seconds of play; match score refunds
//! time, capped at the initial budget. The caller reads `expired()` to
//! end the session; the engine never touches this state.

use crate::types::{
    TIMER_BONUS_PER_MATCH_S, TIMER_INITIAL_S, TIMER_SPEED_UP_FACTOR, TIMER_SPEED_UP_INTERVAL_S,
};

#[derive(Debug, Clone)]
pub struct DifficultyTimer {
    remaining_s: f64,
    speed: f64,
    since_speed_up_s: f64,
    expired: bool,
}

impl DifficultyTimer {
    pub fn new() -> Self {
        Self {
            remaining_s: TIMER_INITIAL_S,
            speed: 1.0,
            since_speed_up_s: 0.0,
            expired: false,
        }
    }

    /// Advance the countdown by one tick.
    ///
    /// `matched` is the tick's score delta; a positive delta refunds
    /// `matched * 2/3` seconds (two thirds of the per-match bonus,
    /// scaling by average run contribution), never past the initial
    /// budget. Once expired the timer stays expired until `reset`.
    pub fn update(&mut self, delta_time_s: f64, matched: u32) {
        if self.expired {
            return;
        }

        self.remaining_s -= delta_time_s * self.speed;
        self.since_speed_up_s += delta_time_s;
        if self.since_speed_up_s >= TIMER_SPEED_UP_INTERVAL_S {
            self.speed *= TIMER_SPEED_UP_FACTOR;
            self.since_speed_up_s = 0.0;
        }

        if matched > 0 {
            self.remaining_s += f64::from(matched) * TIMER_BONUS_PER_MATCH_S / 3.0;
            if self.remaining_s > TIMER_INITIAL_S {
                self.remaining_s = TIMER_INITIAL_S;
            }
        }

        if self.remaining_s <= 0.0 {
            self.remaining_s = 0.0;
            self.expired = true;
        }
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    pub fn remaining_s(&self) -> f64 {
        self.remaining_s
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DifficultyTimer {
    fn default() -> Self {
        Self::new()
    }
}
