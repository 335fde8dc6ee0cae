//! Progress Engine
//!
//! Completion-fraction and decay calculators plus the date-window helpers
//! they share. Everything here is a pure function over borrowed inputs with
//! an explicit `now`: no I/O, no retained state, deterministic for identical
//! inputs and an identical clock.

#![warn(missing_docs)]

pub mod calculator;
pub mod decay;
pub mod window;

pub use calculator::compute_progress;
pub use decay::{compute_decay, DECAY_WINDOW_DAYS};
pub use window::{count_scheduled_days_between, start_of_day, start_of_month, start_of_week};
