//! Core simulation: the demon, its actions, and the tick engine.

pub mod actions;
pub mod constants;
pub mod core_game;
pub mod demon;
pub mod stat_math;
pub mod tick;

pub use constants::*;
